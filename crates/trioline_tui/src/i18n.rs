//! Message catalog for the two supported display languages.
//!
//! The engine exposes only structured data (which mark, which outcome);
//! everything the player reads goes through a [`Messages`] resolver that
//! maps a symbolic key plus named placeholders to a display string. The
//! resolver is a value injected into the app, not a process-wide global,
//! so game logic stays free of localization concerns.

use trioline::Player;

/// Supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Lang {
    /// English (default).
    En,
    /// Bengali.
    Bn,
}

impl Lang {
    /// Returns the other supported language.
    pub fn toggle(self) -> Self {
        match self {
            Lang::En => Lang::Bn,
            Lang::Bn => Lang::En,
        }
    }
}

/// Symbolic message key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Application title.
    Title,
    /// Greeting shown above the board.
    Welcome,
    /// Turn banner; takes a `{player}` placeholder.
    NextPlayer,
    /// Reset control label.
    Reset,
    /// End-of-game modal title.
    Congratulations,
    /// Winner banner prefix.
    Winner,
    /// Modal acknowledge label.
    Ok,
    /// Draw banner.
    Draw,
    /// Quit control label.
    Quit,
}

/// Resolves message keys to display strings in the selected language.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    lang: Lang,
}

impl Messages {
    /// Creates a resolver for the given language.
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    /// Returns the selected language.
    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Switches to the other language.
    pub fn toggle_lang(&mut self) {
        self.lang = self.lang.toggle();
    }

    /// Looks up the string for a key in the selected language.
    pub fn resolve(&self, key: Key) -> &'static str {
        match (self.lang, key) {
            (Lang::En, Key::Title) => "Tic Tac Toe Game",
            (Lang::En, Key::Welcome) => "Welcome to the Tic Tac Toe Game!",
            (Lang::En, Key::NextPlayer) => "Next Player: {player}",
            (Lang::En, Key::Reset) => "Reset Game",
            (Lang::En, Key::Congratulations) => "Congratulations!",
            (Lang::En, Key::Winner) => "Winner",
            (Lang::En, Key::Ok) => "OK",
            (Lang::En, Key::Draw) => "It's a draw!",
            (Lang::En, Key::Quit) => "Quit",
            (Lang::Bn, Key::Title) => "টিক ট্যাক টো গেম",
            (Lang::Bn, Key::Welcome) => "টিক ট্যাক টো গেমটিতে স্বাগতম!",
            (Lang::Bn, Key::NextPlayer) => "পরবর্তী খেলোয়াড়: {player}",
            (Lang::Bn, Key::Reset) => "গেম রিসেট",
            (Lang::Bn, Key::Congratulations) => "অভিনন্দন!",
            (Lang::Bn, Key::Winner) => "বিজয়ী",
            (Lang::Bn, Key::Ok) => "ঠিক আছে",
            (Lang::Bn, Key::Draw) => "খেলা ড্র হয়েছে!",
            (Lang::Bn, Key::Quit) => "প্রস্থান",
        }
    }

    /// Turn banner with the `{player}` placeholder filled in.
    pub fn next_player(&self, player: Player) -> String {
        self.resolve(Key::NextPlayer)
            .replace("{player}", &player.to_string())
    }

    /// Winner banner, e.g. "Winner: X".
    pub fn winner_is(&self, player: Player) -> String {
        format!("{}: {}", self.resolve(Key::Winner), player)
    }

    /// Label for the language-switch control: the name of the language
    /// the switch leads to, written in that language.
    pub fn other_lang_label(&self) -> &'static str {
        match self.lang {
            Lang::En => "বাংলা",
            Lang::Bn => "English",
        }
    }
}
