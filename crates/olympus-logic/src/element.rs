//! Element resolution: Western sign to element.

use crate::signs::{Element, WesternSign};

/// Element for a Western sign.
///
/// Fire, Earth and Air are listed explicitly; every other sign is Water.
pub fn resolve_element(sign: WesternSign) -> Element {
    use WesternSign::*;

    match sign {
        Aries | Leo | Sagittarius => Element::Fire,
        Taurus | Virgo | Capricorn => Element::Earth,
        Gemini | Libra | Aquarius => Element::Air,
        _ => Element::Water,
    }
}

/// The three Western signs of an element, in cycle order.
pub fn signs_of(element: Element) -> Vec<WesternSign> {
    WesternSign::ALL
        .into_iter()
        .filter(|s| resolve_element(*s) == element)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_signs() {
        assert_eq!(resolve_element(WesternSign::Cancer), Element::Water);
        assert_eq!(resolve_element(WesternSign::Scorpio), Element::Water);
        assert_eq!(resolve_element(WesternSign::Pisces), Element::Water);
    }

    #[test]
    fn test_partition_is_three_per_element() {
        for element in Element::ALL {
            assert_eq!(signs_of(element).len(), 3, "{}", element);
        }
    }

    #[test]
    fn test_signs_of_fire() {
        assert_eq!(
            signs_of(Element::Fire),
            vec![WesternSign::Aries, WesternSign::Leo, WesternSign::Sagittarius]
        );
    }

    #[test]
    fn test_element_cycles_every_four_signs() {
        for sign in WesternSign::ALL {
            assert_eq!(resolve_element(sign), Element::ALL[sign.index() % 4]);
        }
    }
}
