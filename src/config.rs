//! Build-time configuration and page constants.
//!
//! Deployment-specific values come from `option_env!` so a Trunk build can
//! override them without touching the source:
//!
//! - `SUBSCRIBE_URL`: endpoint that receives email signups as JSON.
//! - `LAUNCH_PROGRESS`: percentage shown in the status bar (0-100).

/// Viewports narrower than this are laid out as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub const SCENE_TAG: &str = "spline-viewer";
pub const SCENE_URL: &str = "https://prod.spline.design/pdhE31ufbO4t81nM/scene.splinecode";
pub const SCENE_TRANSITION: &str = "transform 0.2s ease-out";

pub const BRAND_NAME: &str = "CAFCO HOME";
pub const BRAND_TAGLINE: &str = "Premium Furniture";

pub const CONTACT_EMAIL: &str = "info@cafcohome.com";
pub const CONTACT_PHONE: &str = "+6282422901";
pub const CONTACT_PHONE_DISPLAY: &str = "+62 824 2290 1";

pub const PARTICLE_COUNT: usize = 50;
pub const PROGRESS_BLOCKS: usize = 20;
pub const DEFAULT_PROGRESS: u8 = 85;

/// Days, hours, minutes, seconds left until launch when the page loads.
pub const LAUNCH_COUNTDOWN: (u32, u8, u8, u8) = (30, 12, 45, 30);

pub fn get_subscribe_url() -> Option<&'static str> {
    option_env!("SUBSCRIBE_URL").filter(|url| !url.trim().is_empty())
}

pub fn get_progress_percent() -> u8 {
    parse_progress(option_env!("LAUNCH_PROGRESS"))
}

fn parse_progress(raw: Option<&str>) -> u8 {
    raw.and_then(|value| value.trim().parse::<u16>().ok())
        .map(|value| value.min(100) as u8)
        .unwrap_or(DEFAULT_PROGRESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_defaults_when_unset_or_garbage() {
        assert_eq!(parse_progress(None), DEFAULT_PROGRESS);
        assert_eq!(parse_progress(Some("almost")), DEFAULT_PROGRESS);
        assert_eq!(parse_progress(Some("-4")), DEFAULT_PROGRESS);
    }

    #[test]
    fn progress_is_clamped_to_full() {
        assert_eq!(parse_progress(Some(" 100 ")), 100);
        assert_eq!(parse_progress(Some("250")), 100);
        assert_eq!(parse_progress(Some("42")), 42);
    }
}
