mod dialog;
mod flash;
mod global_footer;
mod hint_dialog;
mod key_hints;
mod riddle_card;
mod start_screen;
mod status_bar;
mod summary_dialog;
mod theme;

pub use dialog::{DialogFrame, InstructionBar};
pub use flash::{FlashKind, FlashState};
pub use global_footer::GlobalFooter;
pub use hint_dialog::HintDialog;
pub use key_hints::{HintPlacement, KeyHints};
pub use riddle_card::RiddleCard;
pub use start_screen::StartScreen;
pub use status_bar::StatusBar;
pub use summary_dialog::SummaryDialog;
pub use theme::*;
