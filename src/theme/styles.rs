//! Global CSS styles for Folio.
//!
//! All animation timing lives here: the interaction core only flips flags,
//! the transitions below turn them into movement. Accordion breakpoints
//! mirror `folio_core::Breakpoints` (small <= 1024px, medium <= 1440px);
//! the mobile navigation switches at 640px.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SLATE (Backgrounds) */
  --slate-deep: #10141c;
  --slate-raised: #161c27;
  --slate-border: #242c3a;

  /* AMBER (Accents, Active States) */
  --amber: #e8a852;
  --amber-soft: rgba(232, 168, 82, 0.35);

  /* TEXT */
  --text-primary: #eef1f6;
  --text-secondary: rgba(238, 241, 246, 0.72);
  --text-muted: rgba(238, 241, 246, 0.45);

  /* Typography */
  --font-sans: 'Avenir Next', 'Segoe UI', 'Helvetica Neue', sans-serif;

  /* Transitions */
  --ease-panel: 0.5s ease-in;
  --ease-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--slate-deep);
  color: var(--text-primary);
  line-height: 1.6;
  overflow: hidden;
}

a {
  text-decoration: none;
  color: inherit;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

/* === Page scroll container === */
.page {
  height: 100vh;
  overflow-y: auto;
  scroll-behavior: smooth;
}

main {
  max-width: 1600px;
  margin: 0 auto;
  padding: 0 2rem;
}

.page-section {
  min-height: 60vh;
  padding: 6.5rem 0 2rem;
}

.section-header {
  font-size: 2rem;
  font-weight: 600;
  letter-spacing: 0.04em;
  margin-bottom: 2rem;
}

.body-text {
  max-width: 46rem;
  color: var(--text-secondary);
}

/* === Hero === */
.hero {
  min-height: calc(100vh - 4.5rem);
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  text-align: center;
  gap: 1rem;
}

.hero-name {
  font-size: 3.25rem;
  font-weight: 700;
  letter-spacing: 0.02em;
}

.hero-tagline {
  color: var(--text-secondary);
  font-size: 1.2rem;
}

.hero-cta {
  margin-top: 1.5rem;
  padding: 0.6rem 1.6rem;
  border: 1px solid var(--amber);
  border-radius: 2rem;
  color: var(--amber);
  transition: background var(--ease-fast), color var(--ease-fast);
}

.hero-cta:hover {
  background: var(--amber);
  color: var(--slate-deep);
}

/* === Navigation header (desktop) === */
.nav-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  background: rgba(16, 20, 28, 0.9);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--slate-border);
}

.nav-header-inner {
  max-width: 1600px;
  margin: 0 auto;
  height: 4.5rem;
  padding: 0 2rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.app-title {
  font-size: 1.3rem;
  font-weight: 700;
  letter-spacing: 0.12em;
  text-transform: uppercase;
  color: var(--amber);
}

.nav-links {
  display: flex;
  gap: 2.25rem;
}

.nav-link {
  position: relative;
  padding: 0.35rem 0;
  color: var(--text-secondary);
  transition: color var(--ease-fast);
}

.nav-link:hover {
  color: var(--text-primary);
}

/* Active-tab underline slides via width transition */
.nav-link::after {
  content: '';
  position: absolute;
  left: 0;
  bottom: 0;
  height: 2px;
  width: 0;
  background: var(--amber);
  transition: width 0.3s ease;
}

.nav-link.active {
  color: var(--text-primary);
}

.nav-link.active::after {
  width: 100%;
}

/* === Mobile navigation === */
.hamburger,
.mobile-menu,
.mobile-backdrop {
  display: none;
}

@media (max-width: 640px) {
  .nav-header {
    display: none;
  }

  .hamburger {
    display: flex;
    position: fixed;
    top: 1rem;
    right: 1rem;
    z-index: 120;
    padding: 0.6rem;
    border-radius: 50%;
    background: var(--slate-raised);
    border: 1px solid var(--slate-border);
    color: var(--text-primary);
    animation: drop-in 0.3s ease;
  }

  .mobile-backdrop {
    display: block;
    position: fixed;
    inset: 0;
    z-index: 130;
    background: rgba(0, 0, 0, 0.55);
  }

  .mobile-menu {
    display: flex;
    flex-direction: column;
    gap: 1.25rem;
    position: fixed;
    top: 0;
    left: 0;
    bottom: 0;
    z-index: 140;
    width: min(72vw, 20rem);
    padding: 4.5rem 2rem 2rem;
    background: var(--slate-raised);
    border-right: 1px solid var(--slate-border);
    animation: menu-in 0.35s ease;
  }

  .mobile-menu-close {
    position: absolute;
    top: 1rem;
    right: 1rem;
    color: var(--text-secondary);
  }

  .mobile-tab {
    color: var(--text-secondary);
    transition: color var(--ease-fast);
  }

  .mobile-tab.active,
  .mobile-tab:hover {
    color: var(--amber);
  }
}

@keyframes drop-in {
  from { transform: translateY(-150%); opacity: 0; }
  to   { transform: translateY(0); opacity: 1; }
}

@keyframes menu-in {
  from { transform: translateX(-100%); }
  to   { transform: translateX(0); }
}

/* === Horizontal accordion === */
.accordion {
  position: relative;
  width: 100%;
}

.accordion-rail {
  display: flex;
  gap: 1rem;
  height: 26rem;
}

.accordion-section {
  position: relative;
  flex: 1 1 0;
  min-width: 0;
  transition: transform var(--ease-panel), flex-grow var(--ease-panel);
}

.accordion-section.active {
  flex-grow: 2.5;
  z-index: 10;
}

/* Sections beside the expanded one slide out of the way */
.accordion-section.focused.shift-left:not(.active) {
  transform: translateX(-100%);
}

.accordion-section.focused:not(.active):not(.shift-left) {
  transform: translateX(100%);
}

.section-image-frame {
  height: 100%;
  overflow: hidden;
  border-radius: 0.75rem;
  border: 1px solid var(--slate-border);
  background: var(--slate-raised);
  cursor: pointer;
}

.section-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0.7;
  transition: opacity var(--ease-panel), transform var(--ease-panel);
}

.section-image-frame:hover .section-image {
  opacity: 1;
}

.accordion-section.active .section-image {
  opacity: 0.75;
}

/* Inactive neighbours dim while a panel is open */
.accordion-section.focused:not(.active) .section-image {
  opacity: 0.25;
}

.section-name {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 1.25rem;
  text-align: center;
  pointer-events: none;
  opacity: 1;
  transition: opacity var(--ease-panel);
}

.section-name h6 {
  display: inline-block;
  padding: 0.3rem 0.9rem;
  border-radius: 1rem;
  background: rgba(16, 20, 28, 0.8);
  font-size: 0.95rem;
  font-weight: 600;
  letter-spacing: 0.05em;
}

/* The rail label fades once the section is active or the rail is focused */
.accordion-section.active .section-name,
.accordion-section.focused .section-name {
  opacity: 0;
}

/* Expanded in-rail detail panel; the latter half of the rail opens left */
.section-content {
  position: absolute;
  top: 0;
  width: 200%;
  height: 100%;
  padding: 1.5rem 2rem;
  overflow-y: auto;
  text-align: left;
  background: var(--slate-raised);
  border: 1px solid var(--slate-border);
  border-radius: 0.75rem;
  z-index: 20;
  animation: panel-from-right 0.5s ease-in 0.2s backwards;
}

.accordion-section:not(.is-last) .section-content {
  left: 100%;
  margin-left: 1rem;
}

.accordion-section.is-last .section-content {
  right: 100%;
  margin-right: 1rem;
  animation-name: panel-from-left;
}

@keyframes panel-from-right {
  from { opacity: 0; transform: translateX(-8%); }
  to   { opacity: 1; transform: translateX(0); }
}

@keyframes panel-from-left {
  from { opacity: 0; transform: translateX(8%); }
  to   { opacity: 1; transform: translateX(0); }
}

.title-main {
  font-size: 1.5rem;
  font-weight: 700;
}

.title-sub {
  margin-top: 0.25rem;
  font-size: 1rem;
  font-weight: 500;
  color: var(--amber);
}

.content-list {
  list-style: none;
  margin-top: 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.content-list-item {
  color: var(--text-secondary);
  border-left: 2px solid var(--slate-border);
  padding-left: 1rem;
}

.title-line-item {
  font-size: 0.95rem;
  font-weight: 600;
  color: var(--text-primary);
}

/* === Small-screen carousel (accordion breakpoint, <= 1024px) === */
.carousel-card {
  position: relative;
  margin: 0 3.5rem;
  touch-action: pan-y;
}

.carousel-card.slide-from-right {
  animation: card-from-right 0.4s ease-out;
}

.carousel-card.slide-from-left {
  animation: card-from-left 0.4s ease-out;
}

@keyframes card-from-right {
  from { transform: translateX(60vw); opacity: 0; }
  to   { transform: translateX(0); opacity: 1; }
}

@keyframes card-from-left {
  from { transform: translateX(-60vw); opacity: 0; }
  to   { transform: translateX(0); opacity: 1; }
}

.carousel-image-frame {
  aspect-ratio: 3 / 4;
  max-height: 24rem;
  margin: 0 auto;
  overflow: hidden;
  border-radius: 0.75rem;
  border: 1px solid var(--slate-border);
}

.carousel-image-frame .section-image {
  opacity: 0.75;
}

.carousel-arrow {
  position: absolute;
  top: 40%;
  z-index: 30;
  color: var(--text-secondary);
  filter: brightness(70%);
  transition: filter var(--ease-fast), transform var(--ease-fast);
}

.carousel-arrow:hover {
  filter: brightness(100%);
  transform: scale(1.1);
}

.carousel-arrow.left { left: 0.5rem; }
.carousel-arrow.right { right: 0.5rem; }

.carousel-close {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  z-index: 30;
  padding: 0.4rem;
  border-radius: 50%;
  background: var(--slate-raised);
  border: 1px solid var(--slate-border);
  filter: brightness(70%);
  transition: filter var(--ease-fast), transform var(--ease-fast);
}

.carousel-close:hover {
  filter: brightness(100%);
  transform: scale(1.2);
}

.carousel-content {
  margin-top: 1.5rem;
  text-align: left;
  animation: panel-from-right 0.5s ease-in 0.1s backwards;
}

/* Tablet rail tightens up (medium breakpoint, <= 1440px) */
@media (max-width: 1440px) {
  .accordion-rail {
    height: 22rem;
    gap: 0.75rem;
  }
}

@media (max-width: 1024px) {
  .accordion-rail {
    height: 18rem;
    gap: 0.5rem;
  }

  .page-section {
    padding-top: 5rem;
  }
}

/* === Contact & footer === */
.contact-links {
  display: flex;
  gap: 2rem;
}

.contact-link {
  color: var(--amber);
  border-bottom: 1px solid transparent;
  transition: border-color var(--ease-fast);
}

.contact-link:hover {
  border-color: var(--amber);
}

.page-footer {
  padding: 2rem;
  text-align: center;
  color: var(--text-muted);
  font-size: 0.85rem;
  border-top: 1px solid var(--slate-border);
}
"#;
