use constcat::concat;

mod components;
mod home;
mod pages;
mod variables;

pub use components::BASE_COMPONENTS;
pub use home::HOME_STYLES;
pub use pages::PAGE_STYLES;
pub use variables::CSS_VARIABLES;

// everything shared by every route: resets, the palette (both schemes), base
// components and the header/footer frame
pub const MODERN_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

a {
  color: var(--text-link);
  text-decoration: none;
}

img {
  display: block;
  max-width: 100%;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Application frame */
.app-header {
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-4);
  max-width: var(--container-width);
  margin: 0 auto;
}

.logo {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--text-primary);
}

.logo .accent {
  color: var(--primary);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  transition: color var(--transition-fast) var(--easing-standard),
              background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--text-primary);
  background-color: var(--surface-muted);
}

.nav-link.active {
  color: var(--primary);
  background-color: var(--tint);
}

.theme-toggle {
  width: 40px;
  height: 40px;
  font-size: 1.1rem;
}

.app-footer {
  padding: var(--space-8) 0;
  text-align: center;
  font-size: 0.875rem;
  color: var(--text-tertiary);
  background-color: var(--surface);
  border-top: 1px solid var(--border-soft);
}
"#
);
