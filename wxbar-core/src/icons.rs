//! Maps OpenWeather condition codes to owfont glyphs.
//!
//! owfont (<https://websygen.github.io/owfont/>) assigns one private-use
//! codepoint per OpenWeather condition code. Clear and lightly clouded
//! skies (800, 801, 802) and calm wind (951) additionally carry a night
//! variant; every other code renders the same glyph around the clock.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fallback glyph (clear sky, day) for codes missing from the table.
pub const DEFAULT_GLYPH: char = '\u{ED80}';

#[derive(Debug, Clone, Copy)]
enum Icon {
    Fixed(char),
    DayNight { day: char, night: char },
}

impl Icon {
    fn for_phase(&self, is_day: bool) -> char {
        match *self {
            Icon::Fixed(glyph) => glyph,
            Icon::DayNight { day, night } => {
                if is_day {
                    day
                } else {
                    night
                }
            }
        }
    }
}

// One entry per OpenWeather condition code, built on first use.
static ICON_MAP: Lazy<HashMap<u16, Icon>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // Thunderstorm
    map.insert(200, Icon::Fixed('\u{EB28}')); // thunderstorm with light rain
    map.insert(201, Icon::Fixed('\u{EB29}')); // thunderstorm with rain
    map.insert(202, Icon::Fixed('\u{EB2A}')); // thunderstorm with heavy rain
    map.insert(210, Icon::Fixed('\u{EB32}')); // light thunderstorm
    map.insert(211, Icon::Fixed('\u{EB33}')); // thunderstorm
    map.insert(212, Icon::Fixed('\u{EB34}')); // heavy thunderstorm
    map.insert(221, Icon::Fixed('\u{EB3D}')); // ragged thunderstorm
    map.insert(230, Icon::Fixed('\u{EB46}')); // thunderstorm with light drizzle
    map.insert(231, Icon::Fixed('\u{EB47}')); // thunderstorm with drizzle
    map.insert(232, Icon::Fixed('\u{EB48}')); // thunderstorm with heavy drizzle

    // Drizzle
    map.insert(300, Icon::Fixed('\u{EB8C}')); // light intensity drizzle
    map.insert(301, Icon::Fixed('\u{EB8D}')); // drizzle
    map.insert(302, Icon::Fixed('\u{EB8E}')); // heavy intensity drizzle
    map.insert(310, Icon::Fixed('\u{EB96}')); // light intensity drizzle rain
    map.insert(311, Icon::Fixed('\u{EB97}')); // drizzle rain
    map.insert(312, Icon::Fixed('\u{EB98}')); // heavy intensity drizzle rain
    map.insert(313, Icon::Fixed('\u{EB99}')); // shower rain and drizzle
    map.insert(314, Icon::Fixed('\u{EB9A}')); // heavy shower rain and drizzle
    map.insert(321, Icon::Fixed('\u{EBA1}')); // shower drizzle

    // Rain
    map.insert(500, Icon::Fixed('\u{EC54}')); // light rain
    map.insert(501, Icon::Fixed('\u{EC55}')); // moderate rain
    map.insert(502, Icon::Fixed('\u{EC56}')); // heavy intensity rain
    map.insert(503, Icon::Fixed('\u{EC57}')); // very heavy rain
    map.insert(504, Icon::Fixed('\u{EC58}')); // extreme rain
    map.insert(511, Icon::Fixed('\u{EC5F}')); // freezing rain
    map.insert(520, Icon::Fixed('\u{EC68}')); // light intensity shower rain
    map.insert(521, Icon::Fixed('\u{EC69}')); // shower rain
    map.insert(522, Icon::Fixed('\u{EC6A}')); // heavy intensity shower rain
    map.insert(531, Icon::Fixed('\u{EC73}')); // ragged shower rain

    // Snow
    map.insert(600, Icon::Fixed('\u{ECB8}')); // light snow
    map.insert(601, Icon::Fixed('\u{ECB9}')); // snow
    map.insert(602, Icon::Fixed('\u{ECBA}')); // heavy snow
    map.insert(611, Icon::Fixed('\u{ECC3}')); // sleet
    map.insert(612, Icon::Fixed('\u{ECC4}')); // shower sleet
    map.insert(615, Icon::Fixed('\u{ECC7}')); // light rain and snow
    map.insert(616, Icon::Fixed('\u{ECC8}')); // rain and snow
    map.insert(620, Icon::Fixed('\u{ECCC}')); // light shower snow
    map.insert(621, Icon::Fixed('\u{ECCD}')); // shower snow
    map.insert(622, Icon::Fixed('\u{ECCE}')); // heavy shower snow

    // Atmosphere
    map.insert(701, Icon::Fixed('\u{ED1D}')); // mist
    map.insert(711, Icon::Fixed('\u{ED27}')); // smoke
    map.insert(721, Icon::Fixed('\u{ED31}')); // haze
    map.insert(731, Icon::Fixed('\u{ED3B}')); // sand/dust whirls
    map.insert(741, Icon::Fixed('\u{ED45}')); // fog
    map.insert(751, Icon::Fixed('\u{ED4F}')); // sand
    map.insert(761, Icon::Fixed('\u{ED59}')); // dust
    map.insert(762, Icon::Fixed('\u{ED5A}')); // volcanic ash
    map.insert(771, Icon::Fixed('\u{ED63}')); // squalls
    map.insert(781, Icon::Fixed('\u{ED6D}')); // tornado

    // Clear / clouds
    map.insert(800, Icon::DayNight { day: '\u{ED80}', night: '\u{F168}' }); // clear sky
    map.insert(801, Icon::DayNight { day: '\u{ED81}', night: '\u{F169}' }); // few clouds
    map.insert(802, Icon::DayNight { day: '\u{ED82}', night: '\u{F16A}' }); // scattered clouds
    map.insert(803, Icon::Fixed('\u{ED83}')); // broken clouds
    map.insert(804, Icon::Fixed('\u{ED84}')); // overcast clouds

    // Extreme
    map.insert(900, Icon::Fixed('\u{EDE4}')); // tornado
    map.insert(901, Icon::Fixed('\u{EDE5}')); // tropical storm
    map.insert(902, Icon::Fixed('\u{EDE6}')); // hurricane
    map.insert(903, Icon::Fixed('\u{EDE7}')); // cold
    map.insert(904, Icon::Fixed('\u{EDE8}')); // hot
    map.insert(905, Icon::Fixed('\u{EDE9}')); // windy
    map.insert(906, Icon::Fixed('\u{EDEA}')); // hail

    // Additional / wind
    map.insert(950, Icon::Fixed('\u{EE16}')); // setting
    map.insert(951, Icon::DayNight { day: '\u{ED80}', night: '\u{F168}' }); // calm (same as clear)
    map.insert(952, Icon::Fixed('\u{EE18}')); // light breeze
    map.insert(953, Icon::Fixed('\u{EE19}')); // gentle breeze
    map.insert(954, Icon::Fixed('\u{EE1A}')); // moderate breeze
    map.insert(955, Icon::Fixed('\u{EE1B}')); // fresh breeze
    map.insert(956, Icon::Fixed('\u{EE1C}')); // strong breeze
    map.insert(957, Icon::Fixed('\u{EE1D}')); // high wind, near gale
    map.insert(958, Icon::Fixed('\u{EE1E}')); // gale
    map.insert(959, Icon::Fixed('\u{EE1F}')); // severe gale
    map.insert(960, Icon::Fixed('\u{EE20}')); // storm
    map.insert(961, Icon::Fixed('\u{EE21}')); // violent storm
    map.insert(962, Icon::Fixed('\u{EE22}')); // hurricane

    map
});

/// Glyph for `condition_code` at the given day phase.
///
/// Total over all code values: codes outside the table resolve to
/// [`DEFAULT_GLYPH`], whatever the phase.
pub fn glyph(condition_code: u16, is_day: bool) -> char {
    ICON_MAP
        .get(&condition_code)
        .map_or(DEFAULT_GLYPH, |icon| icon.for_phase(is_day))
}
