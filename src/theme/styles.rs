//! Global CSS styles for Folio.
//!
//! Neutral portfolio palette with light and dark schemes selected by the
//! `.light` / `.dark` class on the page root.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root, .light {
  --background: #ffffff;
  --foreground: #0a0a0a;
  --muted: #737373;
  --muted-bg: #f5f5f5;
  --border: #e5e5e5;
  --link: #3b82f6;

  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;

  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.25rem;
  --text-3xl: 1.875rem;
  --text-5xl: 3rem;
  --text-6xl: 3.75rem;

  --radius: 0.5rem;
  --transition-normal: 300ms ease;
  --hexagon-opacity: 0.3;
}

.dark {
  --background: #0a0a0a;
  --foreground: #fafafa;
  --muted: #a3a3a3;
  --muted-bg: #171717;
  --border: #262626;
  --hexagon-opacity: 0.5;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  font-family: var(--font-sans);
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Page === */
.page {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: 2.5rem;
  min-height: 100dvh;
  max-width: 64rem;
  margin: 0 auto;
  padding: 3rem 1.5rem;
  background: var(--background);
  color: var(--foreground);
  transition: background var(--transition-normal), color var(--transition-normal);
}

.muted { color: var(--muted); }

.scheme-toggle {
  position: fixed;
  top: 1rem;
  right: 1rem;
  z-index: 10;
  padding: 0.375rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 9999px;
  background: var(--background);
  color: var(--foreground);
  font-size: var(--text-sm);
  cursor: pointer;
}

/* === Blur Fade === */
.blur-fade {
  display: block;
  opacity: 0;
  filter: blur(6px);
  transform: translateY(var(--blur-fade-y, 6px));
  animation: blur-fade-in 0.4s ease-out forwards;
}

.blur-fade-text { display: inline-block; }

@keyframes blur-fade-in {
  to {
    opacity: 1;
    filter: blur(0);
    transform: translateY(0);
  }
}

/* === Hexagon Background === */
.hexagon-bg {
  position: fixed;
  inset: 0;
  z-index: -10;
  pointer-events: none;
  opacity: var(--hexagon-opacity);
}

.hexagon-bg__cells { stroke: var(--border); }

/* === Hero === */
.hero {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 50vh;
}

.hero__row {
  display: flex;
  align-items: flex-end;
  gap: 2rem;
}

.hero__name {
  font-size: var(--text-6xl);
  font-weight: 700;
  letter-spacing: -0.025em;
}

.hero__headline {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-xl);
  color: var(--muted);
}

.hero__employer {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.hero__employer img { height: 2rem; }
.light .logo-dark, .dark .logo-light { display: none; }

/* === Avatar === */
.avatar {
  position: relative;
  display: inline-flex;
  overflow: hidden;
  border-radius: 9999px;
  width: 3rem;
  height: 3rem;
  flex-shrink: 0;
  background: var(--muted-bg);
}

.avatar--hero {
  width: 12rem;
  height: 12rem;
  border: 4px solid var(--border);
}

.avatar__image {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.avatar__fallback {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 100%;
  height: 100%;
  font-weight: 600;
}

/* === About === */
.about-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 4rem;
  align-items: start;
}

@media (min-width: 1024px) {
  .about-grid { grid-template-columns: 1fr 1fr; }
}

.about__heading { font-size: var(--text-3xl); font-weight: 700; margin-bottom: 1.5rem; }

.about__text {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  color: var(--muted);
  line-height: 1.65;
}

/* === Orbit === */
.orbit {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 500px;
  overflow: hidden;
}

.orbit__center {
  font-size: var(--text-5xl);
  font-weight: 700;
}

.orbit-path {
  position: absolute;
  stroke: var(--border);
  pointer-events: none;
}

.orbit-item {
  position: absolute;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 9999px;
  background: var(--background);
  border: 1px solid var(--border);
  overflow: hidden;
  animation: orbit linear infinite;
}

.orbit-item img { width: 70%; height: 70%; object-fit: contain; }

@keyframes orbit {
  from {
    transform: rotate(var(--orbit-angle)) translateY(var(--orbit-radius)) rotate(calc(var(--orbit-angle) * -1));
  }
  to {
    transform: rotate(calc(var(--orbit-angle) + 360deg)) translateY(var(--orbit-radius)) rotate(calc((var(--orbit-angle) * -1) - 360deg));
  }
}

/* === Timeline === */
.timeline {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.section-heading { font-size: var(--text-xl); font-weight: 700; }

.resume-card {
  display: flex;
  gap: 1rem;
  cursor: pointer;
}

.resume-card__body { flex: 1; }

.resume-card__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.5rem;
}

.resume-card__title {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  font-size: var(--text-sm);
  font-weight: 600;
}

.resume-card__chevron { transition: transform var(--transition-normal); }
.resume-card__chevron--open { transform: rotate(90deg); }

.resume-card__period,
.resume-card__subtitle {
  font-size: var(--text-sm);
  color: var(--muted);
}

.resume-card__description { margin-top: 0.5rem; font-size: var(--text-sm); }

/* === Badges === */
.badge-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.25rem;
}

.badge {
  display: inline-flex;
  align-items: center;
  padding: 0.125rem 0.625rem;
  border-radius: 0.375rem;
  font-size: 0.75rem;
  font-weight: 600;
  background: var(--foreground);
  color: var(--background);
}

.badge-secondary {
  background: var(--muted-bg);
  color: var(--foreground);
}

.badge-outline {
  background: transparent;
  color: var(--foreground);
  border: 1px solid var(--border);
}

/* === Projects === */
.section-intro {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  text-align: center;
}

.section-label {
  display: inline-block;
  padding: 0.25rem 0.75rem;
  border-radius: var(--radius);
  background: var(--foreground);
  color: var(--background);
  font-size: var(--text-sm);
}

.section-title {
  font-size: var(--text-5xl);
  font-weight: 700;
  letter-spacing: -0.05em;
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr));
  gap: 1rem;
  margin-top: 3rem;
}

.project-card {
  display: flex;
  flex-direction: column;
  overflow: hidden;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  height: 100%;
  transition: box-shadow var(--transition-normal);
}

.project-card:hover { box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12); }

.project-card__media { display: block; }

.project-card__image,
.project-card__video,
.project-card__placeholder {
  width: 100%;
  height: 10rem;
  object-fit: cover;
  object-position: top;
  background: var(--muted-bg);
}

.project-card__body { padding: 0.75rem; display: flex; flex-direction: column; gap: 0.25rem; }
.project-card__title { font-weight: 600; }
.project-card__dates { font-size: 0.75rem; }
.project-card__description { font-size: 0.75rem; color: var(--muted); }

.project-card__tags,
.project-card__links {
  display: flex;
  flex-wrap: wrap;
  gap: 0.25rem;
  padding: 0 0.75rem 0.75rem;
}

/* === Contact === */
.contact {
  display: grid;
  justify-items: center;
  gap: 1rem;
  padding: 3rem 1rem;
  text-align: center;
}

.contact__text {
  max-width: 600px;
  margin: 0 auto;
  color: var(--muted);
}

.contact__link { color: var(--link); }
.contact__link:hover { text-decoration: underline; }

/* === Reduced Motion === */
@media (prefers-reduced-motion: reduce) {
  .blur-fade {
    animation: none;
    opacity: 1;
    filter: none;
    transform: none;
  }
  .orbit-item { animation: none; }
}
"#;
