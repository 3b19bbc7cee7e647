//! Static text assets: the holiday banner and the digit glyph table.
//!
//! The glyph table is normalized into ten pre-split blocks of
//! `GLYPH_HEIGHT` rows each, indexed directly by digit value, so no
//! offset arithmetic is left over from the raw figlet asset. Rows are
//! stored unpadded; the renderer pads each to `GLYPH_WIDTH` columns.

use crate::consts::GLYPH_HEIGHT;

/// Decorative artwork printed above the day count.
/// The leading blank line is part of the asset and is kept so output
/// matches the historical rendering byte for byte.
pub const BANNER: &str = r#"
          _/^\_
         <     >
          /.^.\
          '/"\'
         (  o  )
        ./'"'"'\.
       ( o  o  o )
      ./"'"'"'"'"\.
     ( o  o   o  o )
    ./'"'"'"'"'"'"'\.
   ( O  O   O   O  O )
  /"'"'"'"'"'"'"'"'"'"\
 // O   O   O   O   O \\
 '"="=="==,...,=="=="="'
    ..--..]###[..--..    (\|)
          '"""'           \'_
                       ,--' ')
     HAPPY HOLIDAYS  O( )_ -\
                       '"""' "'"#;

/// Label printed beneath the day count.
pub const LABEL: &str = "-- Days to Wait Until Christmas --";

/// One stylized glyph per decimal digit, in digit order.
/// Modified roman figlet font.
pub const DIGIT_GLYPHS: [[&str; GLYPH_HEIGHT]; 10] = [
    [
        "  .oooo.",
        " d8P 'Y8b.",
        "888    888",
        "888    888",
        "888    888",
        "'88b  d88",
        " 'Y8bd8P'",
    ],
    [
        "     .o",
        "   o888",
        "    888",
        "    888",
        "    888",
        "    888",
        "   o888o",
    ],
    [
        "  .oooo.",
        ".dP\"\"Y88b",
        "      ]8P'",
        "    .d8P'",
        "  .dP'",
        ".oP     .o",
        "8888888888",
    ],
    [
        "  .oooo.",
        ".dP\"\"Y88b",
        "      ]8P'",
        "    {88b.",
        "     '88b.",
        "o.   .88P",
        "'8bd88P'",
    ],
    [
        "      .o",
        "    .d88",
        "  .d'888",
        ".d'  888",
        "88ooo888oo",
        "     888",
        "    o888o",
    ],
    [
        "  oooooooo",
        " dP'''''''",
        "d88888b.",
        "    'Y88b",
        "      ]88",
        "o.   .88P",
        "'8bd88P'",
    ],
    [
        "    .ooo",
        "  .88'",
        " d88'",
        "d888P\"Ybo.",
        "Y88[   ]88",
        "'Y88   88P",
        " '88bod8'",
    ],
    [
        " ooooooooo",
        "d'''''''8'",
        "      .8'",
        "     .8'",
        "    .8'",
        "   .8'",
        "  .8'",
    ],
    [
        " .ooooo.",
        "d88'   '8.",
        "Y88..  .8'",
        " '88888b.",
        ".8'  ''88b",
        "'8.   .88P",
        " 'boood8'",
    ],
    [
        " .ooooo.",
        "888' 'Y88.",
        "888    888",
        " 'Vbood888",
        "      888'",
        "    .88P'",
        "  .oP",
    ],
];
