//! The CSS color keywords.
//!
//! This module defines the 147 extended color keywords of [CSS Color
//! 3](https://www.w3.org/TR/css-color-3/#svg-color), `rebeccapurple` from
//! [CSS Color 4](https://www.w3.org/TR/css-color-4/#named-colors), and
//! `transparent`. Lookup ignores ASCII case and surrounding white space.
//!
//! ```
//! # use cssrgba::{named, Color};
//! assert_eq!(named::get("CornflowerBlue")?, Color::new(100, 149, 237, 1.0));
//! assert_eq!(named::try_get("transparent"), Some(Color::new(0, 0, 0, 0.0)));
//! assert_eq!(named::try_get("reddish"), None);
//! # Ok::<(), cssrgba::error::ColorError>(())
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::ColorError;
use crate::Color;

/// All color keywords with their colors.
pub static NAMED_COLORS: [(&str, Color); 149] = [
    ("aliceblue", Color::opaque(240, 248, 255)),
    ("antiquewhite", Color::opaque(250, 235, 215)),
    ("aqua", Color::opaque(0, 255, 255)),
    ("aquamarine", Color::opaque(127, 255, 212)),
    ("azure", Color::opaque(240, 255, 255)),
    ("beige", Color::opaque(245, 245, 220)),
    ("bisque", Color::opaque(255, 228, 196)),
    ("black", Color::opaque(0, 0, 0)),
    ("blanchedalmond", Color::opaque(255, 235, 205)),
    ("blue", Color::opaque(0, 0, 255)),
    ("blueviolet", Color::opaque(138, 43, 226)),
    ("brown", Color::opaque(165, 42, 42)),
    ("burlywood", Color::opaque(222, 184, 135)),
    ("cadetblue", Color::opaque(95, 158, 160)),
    ("chartreuse", Color::opaque(127, 255, 0)),
    ("chocolate", Color::opaque(210, 105, 30)),
    ("coral", Color::opaque(255, 127, 80)),
    ("cornflowerblue", Color::opaque(100, 149, 237)),
    ("cornsilk", Color::opaque(255, 248, 220)),
    ("crimson", Color::opaque(220, 20, 60)),
    ("cyan", Color::opaque(0, 255, 255)),
    ("darkblue", Color::opaque(0, 0, 139)),
    ("darkcyan", Color::opaque(0, 139, 139)),
    ("darkgoldenrod", Color::opaque(184, 134, 11)),
    ("darkgray", Color::opaque(169, 169, 169)),
    ("darkgreen", Color::opaque(0, 100, 0)),
    ("darkgrey", Color::opaque(169, 169, 169)),
    ("darkkhaki", Color::opaque(189, 183, 107)),
    ("darkmagenta", Color::opaque(139, 0, 139)),
    ("darkolivegreen", Color::opaque(85, 107, 47)),
    ("darkorange", Color::opaque(255, 140, 0)),
    ("darkorchid", Color::opaque(153, 50, 204)),
    ("darkred", Color::opaque(139, 0, 0)),
    ("darksalmon", Color::opaque(233, 150, 122)),
    ("darkseagreen", Color::opaque(143, 188, 143)),
    ("darkslateblue", Color::opaque(72, 61, 139)),
    ("darkslategray", Color::opaque(47, 79, 79)),
    ("darkslategrey", Color::opaque(47, 79, 79)),
    ("darkturquoise", Color::opaque(0, 206, 209)),
    ("darkviolet", Color::opaque(148, 0, 211)),
    ("deeppink", Color::opaque(255, 20, 147)),
    ("deepskyblue", Color::opaque(0, 191, 255)),
    ("dimgray", Color::opaque(105, 105, 105)),
    ("dimgrey", Color::opaque(105, 105, 105)),
    ("dodgerblue", Color::opaque(30, 144, 255)),
    ("firebrick", Color::opaque(178, 34, 34)),
    ("floralwhite", Color::opaque(255, 250, 240)),
    ("forestgreen", Color::opaque(34, 139, 34)),
    ("fuchsia", Color::opaque(255, 0, 255)),
    ("gainsboro", Color::opaque(220, 220, 220)),
    ("ghostwhite", Color::opaque(248, 248, 255)),
    ("gold", Color::opaque(255, 215, 0)),
    ("goldenrod", Color::opaque(218, 165, 32)),
    ("gray", Color::opaque(128, 128, 128)),
    ("grey", Color::opaque(128, 128, 128)),
    ("green", Color::opaque(0, 128, 0)),
    ("greenyellow", Color::opaque(173, 255, 47)),
    ("honeydew", Color::opaque(240, 255, 240)),
    ("hotpink", Color::opaque(255, 105, 180)),
    ("indianred", Color::opaque(205, 92, 92)),
    ("indigo", Color::opaque(75, 0, 130)),
    ("ivory", Color::opaque(255, 255, 240)),
    ("khaki", Color::opaque(240, 230, 140)),
    ("lavender", Color::opaque(230, 230, 250)),
    ("lavenderblush", Color::opaque(255, 240, 245)),
    ("lawngreen", Color::opaque(124, 252, 0)),
    ("lemonchiffon", Color::opaque(255, 250, 205)),
    ("lightblue", Color::opaque(173, 216, 230)),
    ("lightcoral", Color::opaque(240, 128, 128)),
    ("lightcyan", Color::opaque(224, 255, 255)),
    ("lightgoldenrodyellow", Color::opaque(250, 250, 210)),
    ("lightgray", Color::opaque(211, 211, 211)),
    ("lightgreen", Color::opaque(144, 238, 144)),
    ("lightgrey", Color::opaque(211, 211, 211)),
    ("lightpink", Color::opaque(255, 182, 193)),
    ("lightsalmon", Color::opaque(255, 160, 122)),
    ("lightseagreen", Color::opaque(32, 178, 170)),
    ("lightskyblue", Color::opaque(135, 206, 250)),
    ("lightslategray", Color::opaque(119, 136, 153)),
    ("lightslategrey", Color::opaque(119, 136, 153)),
    ("lightsteelblue", Color::opaque(176, 196, 222)),
    ("lightyellow", Color::opaque(255, 255, 224)),
    ("lime", Color::opaque(0, 255, 0)),
    ("limegreen", Color::opaque(50, 205, 50)),
    ("linen", Color::opaque(250, 240, 230)),
    ("magenta", Color::opaque(255, 0, 255)),
    ("maroon", Color::opaque(128, 0, 0)),
    ("mediumaquamarine", Color::opaque(102, 205, 170)),
    ("mediumblue", Color::opaque(0, 0, 205)),
    ("mediumorchid", Color::opaque(186, 85, 211)),
    ("mediumpurple", Color::opaque(147, 112, 219)),
    ("mediumseagreen", Color::opaque(60, 179, 113)),
    ("mediumslateblue", Color::opaque(123, 104, 238)),
    ("mediumspringgreen", Color::opaque(0, 250, 154)),
    ("mediumturquoise", Color::opaque(72, 209, 204)),
    ("mediumvioletred", Color::opaque(199, 21, 133)),
    ("midnightblue", Color::opaque(25, 25, 112)),
    ("mintcream", Color::opaque(245, 255, 250)),
    ("mistyrose", Color::opaque(255, 228, 225)),
    ("moccasin", Color::opaque(255, 228, 181)),
    ("navajowhite", Color::opaque(255, 222, 173)),
    ("navy", Color::opaque(0, 0, 128)),
    ("oldlace", Color::opaque(253, 245, 230)),
    ("olive", Color::opaque(128, 128, 0)),
    ("olivedrab", Color::opaque(107, 142, 35)),
    ("orange", Color::opaque(255, 165, 0)),
    ("orangered", Color::opaque(255, 69, 0)),
    ("orchid", Color::opaque(218, 112, 214)),
    ("palegoldenrod", Color::opaque(238, 232, 170)),
    ("palegreen", Color::opaque(152, 251, 152)),
    ("paleturquoise", Color::opaque(175, 238, 238)),
    ("palevioletred", Color::opaque(219, 112, 147)),
    ("papayawhip", Color::opaque(255, 239, 213)),
    ("peachpuff", Color::opaque(255, 218, 185)),
    ("peru", Color::opaque(205, 133, 63)),
    ("pink", Color::opaque(255, 192, 203)),
    ("plum", Color::opaque(221, 160, 221)),
    ("powderblue", Color::opaque(176, 224, 230)),
    ("purple", Color::opaque(128, 0, 128)),
    ("rebeccapurple", Color::opaque(102, 51, 153)),
    ("red", Color::opaque(255, 0, 0)),
    ("rosybrown", Color::opaque(188, 143, 143)),
    ("royalblue", Color::opaque(65, 105, 225)),
    ("saddlebrown", Color::opaque(139, 69, 19)),
    ("salmon", Color::opaque(250, 128, 114)),
    ("sandybrown", Color::opaque(244, 164, 96)),
    ("seagreen", Color::opaque(46, 139, 87)),
    ("seashell", Color::opaque(255, 245, 238)),
    ("sienna", Color::opaque(160, 82, 45)),
    ("silver", Color::opaque(192, 192, 192)),
    ("skyblue", Color::opaque(135, 206, 235)),
    ("slateblue", Color::opaque(106, 90, 205)),
    ("slategray", Color::opaque(112, 128, 144)),
    ("slategrey", Color::opaque(112, 128, 144)),
    ("snow", Color::opaque(255, 250, 250)),
    ("springgreen", Color::opaque(0, 255, 127)),
    ("steelblue", Color::opaque(70, 130, 180)),
    ("tan", Color::opaque(210, 180, 140)),
    ("teal", Color::opaque(0, 128, 128)),
    ("thistle", Color::opaque(216, 191, 216)),
    ("tomato", Color::opaque(255, 99, 71)),
    ("turquoise", Color::opaque(64, 224, 208)),
    ("violet", Color::opaque(238, 130, 238)),
    ("wheat", Color::opaque(245, 222, 179)),
    ("white", Color::opaque(255, 255, 255)),
    ("whitesmoke", Color::opaque(245, 245, 245)),
    ("yellow", Color::opaque(255, 255, 0)),
    ("yellowgreen", Color::opaque(154, 205, 50)),
    ("transparent", Color::TRANSPARENT),
];

/// The index from lowercase name to color. It is built on first use.
static INDEX: LazyLock<HashMap<&'static str, Color>> =
    LazyLock::new(|| NAMED_COLORS.iter().copied().collect());

/// Look up the color with the given name.
///
/// This function signals [`ColorError::NullInput`] for an absent name and
/// [`ColorError::UnknownColorName`] for an unknown one.
pub fn get<'a, T: Into<Option<&'a str>>>(name: T) -> Result<Color, ColorError> {
    let name = name.into().ok_or(ColorError::NullInput)?;
    try_get(name).ok_or_else(|| {
        log::debug!("could not find color named {:?}", name);
        ColorError::UnknownColorName(name.to_owned())
    })
}

/// Try looking up the color with the given name.
///
/// This function returns `None` for absent and unknown names.
pub fn try_get<'a, T: Into<Option<&'a str>>>(name: T) -> Option<Color> {
    let name = name.into()?.trim();
    if let Some(color) = INDEX.get(name) {
        return Some(*color);
    }

    // Only allocate for names with uppercase letters.
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        INDEX.get(name.to_ascii_lowercase().as_str()).copied()
    } else {
        None
    }
}

/// Get an iterator over all color keywords in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    NAMED_COLORS.iter().map(|(name, _)| *name)
}

/// Find the first name for the color.
pub(crate) fn name_of(color: &Color) -> Option<&'static str> {
    NAMED_COLORS
        .iter()
        .find(|(_, c)| c == color)
        .map(|(name, _)| *name)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{get, names, try_get, NAMED_COLORS};
    use crate::error::ColorError;
    use crate::Color;
    use std::collections::HashSet;

    #[test]
    fn test_table() {
        let unique = names().collect::<HashSet<_>>();
        assert_eq!(unique.len(), NAMED_COLORS.len(), "duplicate names");
        assert!(names().all(|n| n.bytes().all(|b| b.is_ascii_lowercase())));

        let opaque = NAMED_COLORS.iter().filter(|(_, c)| c.is_opaque()).count();
        assert_eq!(opaque, NAMED_COLORS.len() - 1);
    }

    #[test]
    fn test_get() -> Result<(), ColorError> {
        assert_eq!(get("red")?, Color::opaque(255, 0, 0));
        assert_eq!(get("RED")?, get("Red")?);
        assert_eq!(get(" rebeccapurple ")?, Color::opaque(102, 51, 153));
        assert_eq!(get("transparent")?, Color::new(0, 0, 0, 0.0));
        assert_eq!(get("grey")?, get("gray")?);
        assert_eq!(get(None::<&str>), Err(ColorError::NullInput));
        assert_eq!(
            get("bluish"),
            Err(ColorError::UnknownColorName("bluish".to_owned()))
        );
        Ok(())
    }

    #[test]
    fn test_try_get() {
        assert_eq!(try_get("SkyBlue"), Some(Color::opaque(135, 206, 235)));
        assert_eq!(try_get(Some("yellowgreen")), Some(Color::opaque(154, 205, 50)));
        assert_eq!(try_get(""), None);
        assert_eq!(try_get("sky blue"), None);
        assert_eq!(try_get(None::<&str>), None);
    }

    #[test]
    fn test_concurrent_lookup() {
        let handles = (0..8)
            .map(|_| std::thread::spawn(|| try_get("Chartreuse")))
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().ok().flatten(), Some(Color::opaque(127, 255, 0)));
        }
    }
}
