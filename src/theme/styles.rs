//! Global CSS styles for User Card.
//!
//! The custom properties come from [`super::colors`]; every rule below
//! reads them through `var(...)`.

use super::colors::*;

/// Full stylesheet: palette custom properties, then the rules.
pub fn global_styles() -> String {
    format!("{}{}", custom_properties(), RULES)
}

fn custom_properties() -> String {
    format!(
        r#"
/* === CSS Custom Properties === */
:root {{
  /* BRAND */
  --brand: {BRAND_ORANGE};
  --brand-dark: {BRAND_ORANGE_DARK};
  --brand-glow: {BRAND_GLOW};
  --brand-tint: {BRAND_TINT};

  /* SURFACES */
  --page-bg: {PAGE_BG};
  --card-bg: {CARD_BG};

  /* TEXT */
  --text-primary: {TEXT_PRIMARY};
  --text-body: {TEXT_BODY};
  --text-muted: {TEXT_MUTED};

  /* GENDER ICONS */
  --male-blue: {MALE_BLUE};
  --female-pink: {FEMALE_PINK};

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;

  /* Card widths */
  --card-width: {CARD_MAX_WIDTH};

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease-in-out;
  --transition-slow: 500ms ease;
}}

@media (min-width: 1024px) {{
  :root {{ --card-width: {CARD_MAX_WIDTH_LG}; }}
}}

@media (min-width: 1280px) {{
  :root {{ --card-width: {CARD_MAX_WIDTH_XL}; }}
}}

"#
    )
}

const RULES: &str = r#"/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--page-bg);
  color: var(--text-primary);
  -webkit-font-smoothing: antialiased;
}

/* === Page === */
.page {
  padding: 2rem 0;
}

.page__stack {
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.page__heading {
  font-size: 1.5rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 1rem;
}

/* === Card === */
.user-card-wrap {
  display: flex;
  flex-direction: column;
  align-items: center;
  width: 100%;
  padding: 0.75rem;
}

.user-card {
  position: relative;
  width: 100%;
  max-width: var(--card-width);
  min-height: 2rem;
  padding: 1rem;
  background: var(--card-bg);
  border-radius: 0.5rem;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
  transition: box-shadow var(--transition-slow);
}

.user-card:hover {
  box-shadow: 0 0 15px var(--brand-glow);
}

.user-card__toggle {
  position: absolute;
  top: 1rem;
  right: 1rem;
}

.user-card__header {
  display: flex;
  flex-direction: column;
  align-items: center;
  margin-bottom: 1rem;
}

.user-card__avatar {
  width: 5rem;
  height: 6rem;
  object-fit: cover;
  border-radius: 0.75rem;
  margin-bottom: 0.75rem;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  transition: box-shadow var(--transition-normal);
}

.user-card__avatar:hover {
  box-shadow: 0 0 10px var(--brand-glow);
}

.user-card__identity {
  width: 100%;
  text-align: center;
  padding-right: 2rem;
}

.user-card__name {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  font-size: 1.25rem;
  font-weight: 600;
  letter-spacing: 0.025em;
}

.user-card__title {
  white-space: nowrap;
}

.user-card__fullname,
.user-card__email {
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

.user-card__email {
  color: var(--text-muted);
  margin-top: 0.25rem;
  font-size: 0.875rem;
}

.user-card__location {
  color: var(--text-body);
  margin-bottom: 1rem;
  text-align: center;
  font-size: 0.875rem;
}

.user-card__details {
  overflow: hidden;
  max-height: 0;
  opacity: 0;
  transition: all var(--transition-normal);
}

.user-card__details--open {
  max-height: 12rem;
  opacity: 1;
}

.user-card__details-inner {
  margin-top: 0.5rem;
  padding-left: 1rem;
  border-left: 2px solid var(--brand);
  color: var(--text-muted);
  text-align: left;
}

@media (min-width: 768px) {
  .user-card__header {
    flex-direction: row;
    gap: 1.25rem;
  }

  .user-card__avatar {
    margin-bottom: 0;
  }

  .user-card__identity,
  .user-card__location {
    text-align: left;
  }

  .user-card__identity {
    padding-right: 3rem;
  }

  .user-card__name,
  .gender-badge {
    justify-content: flex-start;
  }
}

@media (min-width: 1024px) {
  .user-card__name { font-size: 1.5rem; }
  .user-card__email,
  .user-card__location,
  .gender-badge__label { font-size: 1rem; }
}

/* === Gender badge === */
.gender-badge {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.25rem;
  color: var(--text-muted);
  margin-top: 0.25rem;
}

.gender-badge__label {
  font-size: 0.875rem;
}

.gender-icon {
  font-size: 1rem;
  line-height: 1;
}

.gender-icon--male { color: var(--male-blue); }
.gender-icon--female { color: var(--female-pink); }

/* === Buttons === */
.btn-filled,
.btn-outline,
.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  font-family: inherit;
  font-size: 0.875rem;
  font-weight: 500;
  border-radius: 0.375rem;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-filled {
  padding: 0.5rem 1rem;
  border: none;
  background: var(--brand);
  color: #ffffff;
}

.btn-filled:hover { background: var(--brand-dark); }

.btn-outline {
  padding: 0.75rem 1rem;
  border: 1px solid var(--brand);
  background: transparent;
  color: var(--brand);
}

.btn-outline:hover:not(:disabled) {
  background: var(--brand);
  color: #ffffff;
}

.btn-outline:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.icon-btn {
  padding: 0.5rem;
  border: none;
  border-radius: 9999px;
  background: transparent;
  color: var(--text-body);
}

.icon-btn:hover { background: var(--brand-tint); }

.contact-bar {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  justify-content: center;
}

.user-card__refresh {
  width: 100%;
  max-width: var(--card-width);
  margin-top: 1rem;
  font-size: 1rem;
}

/* === Spinner === */
.spinner {
  display: inline-block;
  border: 2px solid currentColor;
  border-right-color: transparent;
  border-radius: 50%;
  animation: spin 0.75s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}
"#;
