use constcat::concat;

/// Overlay fade duration.  Must stay equal to the deferred-hide delay in
/// `common::modal::CLOSE_TRANSITION_MS`; checked by a test in `style`.
pub(super) const MODAL_FADE: &str = "400ms";

pub const BASE_COMPONENTS: &str = concat!(
    r#"
/* Layout */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.section-title {
  font-size: 2rem;
  text-align: center;
  margin-bottom: var(--space-8);
}

.section-subtitle {
  text-align: center;
  color: var(--text-secondary);
  margin: calc(-1 * var(--space-6)) 0 var(--space-8);
}

/* Buttons */
.btn {
  display: inline-block;
  border: none;
  cursor: pointer;
  font-size: 1rem;
  font-weight: 600;
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-full);
  transition: background-color 0.2s ease, transform 0.2s ease;
}

.btn:disabled {
  opacity: 0.6;
  cursor: default;
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover:not(:disabled) {
  background-color: var(--primary-dark);
  transform: translateY(-1px);
}

.btn-secondary {
  background-color: transparent;
  color: var(--primary);
  box-shadow: inset 0 0 0 2px var(--primary);
}

.btn-secondary:hover {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-lg {
  padding: var(--space-4) var(--space-8);
  font-size: 1.1rem;
}

/* Nav bar */
.site-nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  height: var(--nav-height);
  transition: background-color 0.3s ease, box-shadow 0.3s ease;
}

.site-nav.nav-scrolled {
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
}

.nav-container {
  max-width: var(--container-width);
  height: 100%;
  margin: 0 auto;
  padding: 0 var(--space-6);
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-6);
}

.logo {
  font-weight: 700;
  font-size: 1.25rem;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-6);
}

.nav-link {
  font-weight: 500;
  color: var(--text-secondary);
  padding: var(--space-2) 0;
  border-bottom: 2px solid transparent;
  transition: color 0.2s ease, border-color 0.2s ease;
}

.nav-link:hover {
  color: var(--text-primary);
}

.nav-link.active-link {
  color: var(--primary);
  border-bottom-color: var(--primary);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.theme-switch {
  border: 1px solid var(--border);
  background-color: var(--surface);
  color: var(--text-primary);
  width: 36px;
  height: 36px;
  border-radius: var(--radius-full);
  cursor: pointer;
  font-size: 1rem;
  line-height: 1;
}

.nav-toggle {
  display: none;
  border: none;
  background: none;
  color: var(--text-primary);
  font-size: 1.5rem;
  cursor: pointer;
}

@media (max-width: 820px) {
  .nav-toggle {
    display: block;
  }

  .nav-links {
    position: fixed;
    inset: var(--nav-height) 0 0 0;
    flex-direction: column;
    justify-content: center;
    gap: var(--space-8);
    background-color: var(--surface);
    transform: translateX(100%);
    transition: transform 0.3s ease;
  }

  .nav-links.nav-open {
    transform: translateX(0);
  }

  .nav-link {
    font-size: 1.3rem;
  }
}

/* Back to top */
.back-to-top {
  position: fixed;
  right: var(--space-6);
  bottom: var(--space-6);
  z-index: 90;
  width: 44px;
  height: 44px;
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--primary);
  color: var(--text-inverse);
  font-size: 1.2rem;
  cursor: pointer;
  box-shadow: var(--shadow-md);
  opacity: 0;
  pointer-events: none;
  transform: translateY(8px);
  transition: opacity 0.3s ease, transform 0.3s ease;
}

.back-to-top.visible {
  opacity: 1;
  pointer-events: auto;
  transform: translateY(0);
}

/* Modal overlay */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 200;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-6);
  background-color: var(--overlay);
  opacity: 0;
  pointer-events: none;
  transition: opacity "#,
    MODAL_FADE,
    r#" ease;
}

.modal-overlay.is-open {
  opacity: 1;
  pointer-events: auto;
}

.modal-overlay[hidden] {
  display: none;
}

.modal-content {
  width: 100%;
  max-width: 560px;
  max-height: 90vh;
  overflow-y: auto;
  position: relative;
  background-color: var(--surface-raised);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
  transform: translateY(12px);
  transition: transform "#,
    MODAL_FADE,
    r#" ease;
}

.modal-overlay.is-open .modal-content {
  transform: translateY(0);
}

.modal-close {
  position: absolute;
  top: var(--space-3);
  right: var(--space-3);
  z-index: 1;
  width: 32px;
  height: 32px;
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--overlay);
  color: var(--text-inverse);
  font-size: 1.2rem;
  cursor: pointer;
}

.modal-image {
  width: 100%;
  height: 260px;
  object-fit: cover;
  border-radius: var(--radius-lg) var(--radius-lg) 0 0;
}

.modal-body {
  padding: var(--space-6);
}

.modal-title {
  margin-bottom: var(--space-2);
}

.modal-price {
  color: var(--primary);
  font-weight: 600;
  margin-bottom: var(--space-4);
}

.modal-description {
  color: var(--text-secondary);
}

.modal-footer {
  padding: 0 var(--space-6) var(--space-6);
  display: flex;
  justify-content: flex-end;
}

/* Forms */
.form-group {
  margin-bottom: var(--space-4);
}

.form-label {
  display: block;
  font-weight: 500;
  margin-bottom: var(--space-1);
}

.form-input,
.form-textarea {
  width: 100%;
  padding: var(--space-3);
  font: inherit;
  color: var(--text-primary);
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
}

.form-input:focus,
.form-textarea:focus {
  outline: 2px solid var(--primary-light);
  border-color: var(--primary);
}

.form-textarea {
  min-height: 120px;
  resize: vertical;
}

.form-status {
  margin-top: var(--space-4);
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-md);
  background-color: var(--success);
  color: var(--text-inverse);
}
"#,
);
