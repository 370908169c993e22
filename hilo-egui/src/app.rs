//! The egui application: widget layout and event handling.

use eframe::egui;
use hilo_core::{
    GameSession, GuessOutcome, Leaderboard, MAX_ATTEMPTS, MAX_TARGET, MIN_TARGET, PlayerLabel,
    ScoreEntry,
};

/// Name used when the player submits an empty name.
const DEFAULT_NAME: &str = "Player";

/// One transient message line shown above the guess field.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Feedback {
    Info(String),
    Error(String),
}

impl Feedback {
    fn info(text: impl Into<String>) -> Self {
        Self::Info(text.into())
    }

    fn error(text: impl Into<String>) -> Self {
        Self::Error(text.into())
    }
}

/// UI intents collected while rendering a frame and applied afterwards,
/// so handlers can take the whole app mutably.
enum Action {
    Start,
    SubmitGuess,
    PlayAgain,
    NewPlayer,
    ToggleScores,
}

/// Which screen the window is showing.
enum Screen {
    /// Collecting the player's name before the first round.
    NameEntry { input: String },
    /// A player at the table, with the live or just-finished round.
    Play(PlayState),
}

/// Everything the play screen needs: the player's label, the current
/// session, the raw guess text, and the feedback line.
struct PlayState {
    label: PlayerLabel,
    session: GameSession,
    guess_input: String,
    feedback: Feedback,
}

impl PlayState {
    fn new(label: PlayerLabel) -> Self {
        log::debug!("round {} started for {}", label.round(), label.name());
        Self {
            label,
            session: GameSession::new(&mut rand::thread_rng()),
            guess_input: String::new(),
            feedback: Feedback::info(format!(
                "Welcome! Guess the number I'm thinking of between {MIN_TARGET} and {MAX_TARGET}."
            )),
        }
    }

    /// Replace the session for another round with the same player.
    ///
    /// The round counter was already advanced when the previous round
    /// finished; it is never reset here.
    fn next_round(&mut self) {
        log::debug!("round {} started for {}", self.label.round(), self.label.name());
        self.session = GameSession::new(&mut rand::thread_rng());
        self.guess_input.clear();
        self.feedback = Feedback::info(format!(
            "New round! Guess a number between {MIN_TARGET} and {MAX_TARGET}."
        ));
    }

    /// Evaluate the current guess text. The field is cleared whether the
    /// guess was accepted or not.
    fn submit_guess(&mut self, board: &mut Leaderboard) {
        if self.session.is_over() {
            return;
        }

        let result = self.session.submit(&self.guess_input);
        self.guess_input.clear();

        match result {
            Err(err) => {
                self.feedback = Feedback::error(format!("{err}. Try again."));
            }
            Ok(GuessOutcome::TooLow) => {
                self.feedback = Feedback::info("Too low. Try again.");
            }
            Ok(GuessOutcome::TooHigh) => {
                self.feedback = Feedback::info("Too high. Try again.");
            }
            Ok(GuessOutcome::Won { attempts }) => {
                self.feedback = Feedback::info(format!(
                    "Congratulations, {}! You guessed the number in {attempts} attempts.",
                    self.label
                ));
                self.finish_round(board, attempts);
            }
            Ok(GuessOutcome::Lost { target }) => {
                self.feedback = Feedback::info(format!(
                    "Out of attempts. The number was {target}."
                ));
                self.finish_round(board, self.session.attempts());
            }
        }
    }

    fn finish_round(&mut self, board: &mut Leaderboard, attempts: u32) {
        log::info!("{} finished a round in {attempts} attempts", self.label);
        board.record(ScoreEntry::new(self.label.clone(), attempts));
        self.label.advance();
    }
}

/// The application state: the active screen plus the session-long
/// leaderboard, which survives play-again and new-player alike.
pub struct GuessApp {
    screen: Screen,
    board: Leaderboard,
    show_scores: bool,
}

impl Default for GuessApp {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessApp {
    /// Create the app on the name-entry screen with an empty leaderboard.
    pub fn new() -> Self {
        Self {
            screen: Screen::NameEntry {
                input: String::new(),
            },
            board: Leaderboard::new(),
            show_scores: false,
        }
    }

    /// Leave the name-entry screen and start the first round.
    fn start_player(&mut self) {
        if let Screen::NameEntry { input } = &self.screen {
            let name = input.trim();
            let name = if name.is_empty() { DEFAULT_NAME } else { name };
            self.screen = Screen::Play(PlayState::new(PlayerLabel::new(name)));
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Start => self.start_player(),
            Action::SubmitGuess => {
                if let Screen::Play(play) = &mut self.screen {
                    play.submit_guess(&mut self.board);
                }
            }
            Action::PlayAgain => {
                if let Screen::Play(play) = &mut self.screen {
                    play.next_round();
                }
            }
            Action::NewPlayer => {
                self.screen = Screen::NameEntry {
                    input: String::new(),
                };
            }
            Action::ToggleScores => self.show_scores = !self.show_scores,
        }
    }
}

impl eframe::App for GuessApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action = None;

        egui::CentralPanel::default().show(ctx, |ui| match &mut self.screen {
            Screen::NameEntry { input } => {
                ui.heading("Guess a Number");
                ui.add_space(8.0);

                ui.label("Enter your name:");
                ui.add(egui::TextEdit::singleline(input).desired_width(f32::INFINITY));
                ui.add_space(8.0);

                if ui.button("Start").clicked() {
                    action = Some(Action::Start);
                }
            }
            Screen::Play(play) => {
                ui.heading("Guess a Number");
                ui.add_space(8.0);

                match &play.feedback {
                    Feedback::Info(text) => {
                        ui.label(text);
                    }
                    Feedback::Error(text) => {
                        ui.colored_label(egui::Color32::RED, format!("⚠ {text}"));
                    }
                }
                ui.add_space(8.0);

                let live = !play.session.is_over();
                ui.add_enabled(
                    live,
                    egui::TextEdit::singleline(&mut play.guess_input)
                        .desired_width(f32::INFINITY),
                );
                if ui.add_enabled(live, egui::Button::new("Guess")).clicked() {
                    action = Some(Action::SubmitGuess);
                }
                ui.label(format!(
                    "Attempts: {}/{MAX_ATTEMPTS}",
                    play.session.attempts()
                ));

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Top Scores").clicked() {
                        action = Some(Action::ToggleScores);
                    }
                    if ui
                        .add_enabled(!live, egui::Button::new("Play Again"))
                        .clicked()
                    {
                        action = Some(Action::PlayAgain);
                    }
                    if ui.button("New Player").clicked() {
                        action = Some(Action::NewPlayer);
                    }
                });
            }
        });

        if self.show_scores {
            egui::Window::new("Top Scores")
                .open(&mut self.show_scores)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        if self.board.is_empty() {
                            ui.label("No finished rounds yet.");
                        }
                        for entry in self.board.entries() {
                            ui.label(entry.to_string());
                        }
                    });
                });
        }

        if let Some(action) = action {
            self.apply(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilo_core::RoundStatus;

    fn play_with_target(name: &str, target: u32) -> PlayState {
        PlayState {
            label: PlayerLabel::new(name),
            session: GameSession::with_target(target),
            guess_input: String::new(),
            feedback: Feedback::info(""),
        }
    }

    #[test]
    fn empty_name_falls_back_to_default() {
        let mut app = GuessApp::new();
        app.start_player();

        match &app.screen {
            Screen::Play(play) => assert_eq!(play.label.name(), DEFAULT_NAME),
            Screen::NameEntry { .. } => panic!("should have left the name screen"),
        }
    }

    #[test]
    fn typed_name_is_trimmed() {
        let mut app = GuessApp::new();
        app.screen = Screen::NameEntry {
            input: "  Alice  ".to_string(),
        };
        app.start_player();

        match &app.screen {
            Screen::Play(play) => assert_eq!(play.label.name(), "Alice"),
            Screen::NameEntry { .. } => panic!("should have left the name screen"),
        }
    }

    #[test]
    fn winning_records_and_advances_the_label() {
        let mut board = Leaderboard::new();
        let mut play = play_with_target("Alice", 40);

        play.guess_input = "40".to_string();
        play.submit_guess(&mut board);

        assert_eq!(board.len(), 1);
        assert_eq!(board.entries()[0].to_string(), "Alice-Try 1: 1");
        assert_eq!(play.label.round(), 2);
        assert!(matches!(&play.feedback, Feedback::Info(text) if text.contains("Congratulations")));
        assert!(play.guess_input.is_empty());
    }

    #[test]
    fn rejected_input_shows_an_error_and_clears_the_field() {
        let mut board = Leaderboard::new();
        let mut play = play_with_target("Alice", 40);

        play.guess_input = "forty".to_string();
        play.submit_guess(&mut board);

        assert!(matches!(play.feedback, Feedback::Error(_)));
        assert!(play.guess_input.is_empty());
        assert!(board.is_empty());
        assert_eq!(play.session.attempts(), 0);
    }

    #[test]
    fn losing_records_the_full_attempt_count() {
        let mut board = Leaderboard::new();
        let mut play = play_with_target("Alice", 1);

        for _ in 0..10 {
            play.guess_input = "100".to_string();
            play.submit_guess(&mut board);
        }

        assert_eq!(play.session.status(), RoundStatus::Lost);
        assert_eq!(board.len(), 1);
        assert_eq!(board.entries()[0].attempts(), 10);
        assert!(matches!(&play.feedback, Feedback::Info(text) if text.contains("was 1")));
    }

    #[test]
    fn finished_round_cannot_be_recorded_twice() {
        let mut board = Leaderboard::new();
        let mut play = play_with_target("Alice", 40);

        play.guess_input = "40".to_string();
        play.submit_guess(&mut board);
        play.guess_input = "40".to_string();
        play.submit_guess(&mut board);

        assert_eq!(board.len(), 1);
        assert_eq!(play.label.round(), 2);
    }

    #[test]
    fn play_again_keeps_the_round_counter() {
        let mut board = Leaderboard::new();
        let mut play = play_with_target("Alice", 40);

        play.guess_input = "40".to_string();
        play.submit_guess(&mut board);
        play.next_round();

        assert_eq!(play.label.round(), 2);
        assert_eq!(play.session.attempts(), 0);
        assert!(!play.session.is_over());
    }

    #[test]
    fn new_player_keeps_the_board() {
        let mut app = GuessApp::new();
        app.screen = Screen::Play(play_with_target("Alice", 40));

        if let Screen::Play(play) = &mut app.screen {
            play.guess_input = "40".to_string();
        }
        app.apply(Action::SubmitGuess);
        app.apply(Action::NewPlayer);

        assert!(matches!(app.screen, Screen::NameEntry { .. }));
        assert_eq!(app.board.len(), 1);
    }
}
