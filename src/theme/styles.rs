//! Global CSS styles for Lifeline.
//!
//! Light values live on `.page`, dark overrides on `.page[data-theme="dark"]`.

pub const GLOBAL_STYLES: &str = r#"
/* === Theme Variables === */
.page {
  --bg: #f5f6fa;
  --surface: #ffffff;
  --text-primary: #1f2430;
  --text-secondary: #5b6275;
  --accent: #4c6ef5;
  --accent-soft: rgba(76, 110, 245, 0.12);
  --line: #d7dbe7;
  --shadow: 0 8px 24px rgba(31, 36, 48, 0.08);
  --overlay: rgba(0, 0, 0, 0.4);
  --danger: #e03131;

  --font-body: 'Vazirmatn', 'Noto Sans Arabic', system-ui, sans-serif;
  --transition-normal: 300ms ease;
  --transition-reveal: 600ms ease;
}

.page[data-theme="dark"] {
  --bg: #11131a;
  --surface: #1b1e28;
  --text-primary: #eef0f6;
  --text-secondary: #a3a9ba;
  --accent: #ffd43b;
  --accent-soft: rgba(255, 212, 59, 0.14);
  --line: #2c3040;
  --shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
  --overlay: rgba(0, 0, 0, 0.6);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  overflow-x: hidden;
}

.page {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-body);
  unicode-bidi: plaintext;
  transition: background var(--transition-normal), color var(--transition-normal);
}

/* === Top Bar === */
.top-bar {
  position: sticky;
  top: 0;
  z-index: 10;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.75rem 1.25rem;
  background: var(--surface);
  box-shadow: var(--shadow);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border: none;
  border-radius: 50%;
  background: transparent;
  color: var(--text-primary);
  font-size: 1.2rem;
  cursor: pointer;
  transition: background var(--transition-normal);
}

.icon-btn:hover {
  background: var(--accent-soft);
  color: var(--accent);
}

/* === Sidebar === */
.sidebar {
  position: fixed;
  top: 0;
  right: -300px;
  width: 280px;
  height: 100vh;
  z-index: 30;
  background: var(--surface);
  box-shadow: var(--shadow);
  transition: right var(--transition-normal);
}

.sidebar.active {
  right: 0;
}

.sidebar-header {
  display: flex;
  justify-content: flex-start;
  padding: 0.75rem;
}

.sidebar-nav {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 1rem 1.5rem;
}

.sidebar-nav a {
  color: var(--text-primary);
  text-decoration: none;
  padding: 0.5rem 0;
  border-bottom: 1px solid var(--line);
}

.sidebar-nav a:hover {
  color: var(--accent);
}

.sidebar-overlay {
  position: fixed;
  inset: 0;
  z-index: 20;
  background: var(--overlay);
  opacity: 0;
  visibility: hidden;
  transition: opacity var(--transition-normal), visibility var(--transition-normal);
}

.sidebar-overlay.active {
  opacity: 1;
  visibility: visible;
}

/* === Hero === */
.hero {
  padding: 4rem 1.5rem 2rem;
  text-align: center;
}

.hero h1 {
  font-size: 2.25rem;
  margin-bottom: 0.75rem;
}

.hero p {
  color: var(--text-secondary);
  font-size: 1.1rem;
}

/* === Timeline === */
.timeline-section {
  padding: 1rem 1.5rem 4rem;
}

.timeline {
  position: relative;
  max-width: 720px;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.timeline::before {
  content: '';
  position: absolute;
  top: 0;
  bottom: 0;
  right: 1.25rem;
  width: 2px;
  background: var(--line);
}

.event-card {
  position: relative;
  margin-right: 3rem;
  padding: 1.25rem 1.5rem;
  border-radius: 12px;
  background: var(--surface);
  box-shadow: var(--shadow);
  opacity: 0;
  transform: translateY(40px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.event-card.visible {
  opacity: 1;
  transform: translateY(0);
}

.event-card::before {
  content: '';
  position: absolute;
  top: 1.5rem;
  right: -2.1rem;
  width: 0.9rem;
  height: 0.9rem;
  border-radius: 50%;
  background: var(--accent);
  box-shadow: 0 0 0 4px var(--accent-soft);
}

.event-icon {
  display: inline-block;
  font-size: 1.75rem;
  margin-bottom: 0.5rem;
  color: var(--accent);
}

.year-badge {
  display: inline-block;
  margin-inline-start: 0.75rem;
  padding: 0.2rem 0.75rem;
  border-radius: 999px;
  background: var(--accent-soft);
  color: var(--accent);
  font-size: 0.85rem;
}

.event-card h3 {
  margin: 0.5rem 0;
  font-size: 1.25rem;
}

.event-card p {
  color: var(--text-secondary);
  line-height: 1.7;
}

.timeline-error {
  text-align: center;
  color: var(--danger);
}

/* === Loader === */
.loader {
  display: flex;
  justify-content: center;
  padding: 3rem 0;
}

.loader-ring {
  width: 2.5rem;
  height: 2.5rem;
  border: 3px solid var(--line);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 0.9s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Footer === */
.site-footer {
  padding: 2rem 1.5rem;
  text-align: center;
  color: var(--text-secondary);
  border-top: 1px solid var(--line);
}

/* === Responsive === */
@media (max-width: 600px) {
  .hero h1 {
    font-size: 1.75rem;
  }

  .event-card {
    margin-right: 2.5rem;
    padding: 1rem;
  }
}
"#;
