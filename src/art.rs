//! ASCII-art banners shown above the menu and each results screen.
//!
//! Each banner starts with a blank line so its first drawn row lands one
//! row below the given offset; the formatter renders banners line by
//! line and the render surface clips anything that does not fit.

pub const MENU: &str = r"
 __        __   _                            _
 \ \      / /__| | ___ ___  _ __ ___   ___  | |_ ___
  \ \ /\ / / _ \ |/ __/ _ \| '_ ` _ \ / _ \ | __/ _ \
   \ V  V /  __/ | (_| (_) | | | | | |  __/ | || (_) |
    \_/\_/ \___|_|\___\___/|_| |_| |_|\___|  \__\___/
                                                    ";

pub const DICE: &str = r"
 _____
|_   _|
  | |
  | |
 _| |_
|_____|

    ";

pub const COIN: &str = r"
  ____
 / ___|
| |
| |___
 \____|

    ";

pub const WALK: &str = r"
 _    _      _
| |  | |    | |
| |  | | ___| | ___  ___  ___  _ __  ___
| |/\| |/ _ \ |/ _ \/ __|/ _ \| '_ \/ __|
\  /\  /  __/ |  __/\__ \ (_) | | | \__ \
 \/  \/ \___|_|\___||___/\___/|_| |_|___/

    ";
