// page-section styles: hero, tours, stats, testimonials, faq, contact

pub const PAGE_STYLES: &str = r#"
/* Hero */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  perspective: 1000px;
  text-align: center;
}

.hero-background {
  position: absolute;
  inset: 0;
  background:
    linear-gradient(rgba(13, 148, 136, 0.55), rgba(16, 32, 29, 0.7)),
    url('/assets/hero.jpg') center / cover no-repeat;
  transition: transform 0.2s ease-out;
  will-change: transform;
}

.hero-content {
  position: relative;
  max-width: 680px;
  padding: 0 var(--space-6);
  color: var(--text-inverse);
  transform-style: preserve-3d;
  transition: transform 0.2s ease-out;
  will-change: transform;
}

.hero-title {
  font-size: clamp(2.5rem, 7vw, 4.5rem);
  margin-bottom: var(--space-4);
}

.hero-subtitle {
  font-size: 1.25rem;
  margin-bottom: var(--space-8);
  opacity: 0.9;
}

.hero-actions {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
  flex-wrap: wrap;
}

/* Scroll-triggered fade-in */
.section {
  padding: var(--space-16) 0;
  opacity: 0;
  transform: translateY(24px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}

.section.is-visible {
  opacity: 1;
  transform: translateY(0);
}

/* Tours */
.tour-filters {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: var(--space-3);
  margin-bottom: var(--space-8);
}

.filter-btn {
  border: 1px solid var(--border);
  background-color: var(--surface);
  color: var(--text-secondary);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  cursor: pointer;
  font-size: 0.95rem;
  transition: background-color 0.2s ease, color 0.2s ease;
}

.filter-btn:hover {
  color: var(--text-primary);
}

.filter-btn.active {
  background-color: var(--primary);
  border-color: var(--primary);
  color: var(--text-inverse);
}

.tours-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: var(--space-6);
}

.tour-card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  overflow: hidden;
  box-shadow: var(--shadow-sm);
  cursor: pointer;
  transition: transform 0.2s ease, box-shadow 0.2s ease;
}

.tour-card:hover {
  transform: translateY(-4px);
  box-shadow: var(--shadow-md);
}

.tour-card.hidden {
  display: none;
}

.tour-card-image {
  position: relative;
}

.tour-card-image img {
  width: 100%;
  height: 220px;
  object-fit: cover;
}

.tour-card-category {
  position: absolute;
  top: var(--space-3);
  left: var(--space-3);
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--accent);
  color: var(--text-inverse);
  font-size: 0.8rem;
  font-weight: 600;
}

.tour-card-info {
  padding: var(--space-4);
}

.tour-card-meta {
  color: var(--text-secondary);
  margin-top: var(--space-1);
}

/* Stats */
.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: var(--space-6);
  margin-bottom: var(--space-12);
}

.stat-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-6);
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
}

.stat-value {
  font-size: 2.25rem;
  font-weight: 700;
  color: var(--primary);
  font-variant-numeric: tabular-nums;
}

.stat-label {
  color: var(--text-secondary);
}

/* Features */
.features-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: var(--space-6);
}

.feature-card {
  padding: var(--space-6);
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
}

.feature-title {
  margin-bottom: var(--space-2);
}

.feature-desc {
  color: var(--text-secondary);
}

/* Testimonials */
.testimonial-slider {
  position: relative;
  max-width: 720px;
  margin: 0 auto;
  min-height: 220px;
}

.testimonial-slide {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  justify-content: center;
  text-align: center;
  padding: 0 var(--space-6);
  opacity: 0;
  pointer-events: none;
  transition: opacity 0.6s ease;
}

.testimonial-slide.active {
  opacity: 1;
  pointer-events: auto;
}

.testimonial-quote {
  font-size: 1.25rem;
  font-style: italic;
  margin-bottom: var(--space-6);
}

.testimonial-author {
  font-weight: 600;
}

.testimonial-role {
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.pagination-dots {
  display: flex;
  justify-content: center;
  gap: var(--space-3);
  margin-top: var(--space-8);
}

.pagination-dots[hidden] {
  display: none;
}

.dot {
  width: 10px;
  height: 10px;
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--border);
  cursor: pointer;
  transition: background-color 0.2s ease, transform 0.2s ease;
}

.dot.active {
  background-color: var(--primary);
  transform: scale(1.3);
}

/* FAQ */
.faq-container {
  max-width: 760px;
  margin: 0 auto;
}

.faq-item {
  border-bottom: 1px solid var(--border);
}

.faq-question {
  width: 100%;
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: var(--space-4);
  padding: var(--space-4) 0;
  border: none;
  background: none;
  color: var(--text-primary);
  font: inherit;
  font-weight: 600;
  text-align: left;
  cursor: pointer;
}

.faq-chevron {
  color: var(--primary);
  font-size: 1.2rem;
}

.faq-answer {
  overflow: hidden;
  max-height: 0;
  transition: max-height 0.3s ease;
  color: var(--text-secondary);
}

.faq-answer p {
  padding-bottom: var(--space-4);
}

/* Contact */
.contact-form {
  max-width: 560px;
  margin: 0 auto;
}

/* Footer */
.site-footer {
  padding: var(--space-8) 0;
  text-align: center;
  color: var(--text-secondary);
  border-top: 1px solid var(--border);
}
"#;
