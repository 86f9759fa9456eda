use constcat::concat;

mod components;
mod home;
mod variables;

pub use home::PAGE_STYLES;

use components::BASE_COMPONENTS;
use variables::CSS_VARIABLES;

// reset + palette variables + shared component styles, injected once at
// the application root
pub const BASE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
  scroll-padding-top: var(--nav-height);
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.6;
  transition: background-color 0.3s ease, color 0.3s ease;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  display: block;
  max-width: 100%;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
);

#[cfg(test)]
mod tests {
    use super::components::MODAL_FADE;

    // the overlay fade and the deferred hide are one contract; if the CSS
    // duration drifts from the scheduled delay the overlay blinks
    #[test]
    fn modal_fade_matches_the_close_delay() {
        let ms: u32 = MODAL_FADE
            .strip_suffix("ms")
            .expect("fade duration is in milliseconds")
            .parse()
            .expect("fade duration is numeric");

        assert_eq!(ms, common::modal::CLOSE_TRANSITION_MS);
    }
}
