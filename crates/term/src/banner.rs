//! Title banner.

/// "RogueMaze" in the standard figlet font.
pub const TITLE_BANNER: &str = r#" ____                        __  __
|  _ \ ___   __ _ _   _  ___|  \/  | __ _ _______
| |_) / _ \ / _` | | | |/ _ \ |\/| |/ _` |_  / _ \
|  _ < (_) | (_| | |_| |  __/ |  | | (_| |/ /  __/
|_| \_\___/ \__, |\__,_|\___|_|  |_|\__,_/___\___|
            |___/"#;

/// Short title used when the terminal is too small for the banner.
pub const TITLE_TEXT: &str = "RogueMaze";

pub fn banner_height() -> u16 {
    TITLE_BANNER.lines().count() as u16
}
