mod gradient;
mod temperature;
mod utils;

pub use gradient::{fill_gradient, fill_solid};
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use smart_leds::hsv::hsv2rgb;
pub use temperature::rgb_from_kelvin;
pub use utils::{BLACK, divide, is_black, scale_by_ratio, scale_percent};

pub type Rgb = RGB8;
pub type Hsv = HSV;
