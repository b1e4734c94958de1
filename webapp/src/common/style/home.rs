pub const HOME_STYLES: &str = r#"
/* Home Page Styles */

/* Hero Section */
.hero {
  position: relative;
  min-height: calc(100vh - var(--header-height));
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  text-align: center;
  padding: 0 var(--space-4);
  background: linear-gradient(to bottom, var(--background), var(--surface));
}

.hero-content {
  max-width: 48rem;
  margin: 0 auto;
}

.avatar {
  width: 192px;
  height: 192px;
  margin: 0 auto var(--space-8);
  border-radius: var(--radius-full);
  border: 4px solid var(--primary);
  overflow: hidden;
  box-shadow: var(--shadow-xl);
}

.avatar img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hero-title {
  font-size: 3.5rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
  color: var(--text-primary);
}

.hero-title .accent {
  color: var(--text-accent);
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin: 0 auto var(--space-8);
  max-width: 42rem;
}

.social-links {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
  margin-bottom: var(--space-12);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-4);
}

.scroll-hint {
  position: absolute;
  bottom: var(--space-8);
  left: 50%;
  animation: bounce 1s infinite;
}

.scroll-hint .icon-button {
  color: var(--primary);
  background-color: var(--surface);
}

/* Highlights Section */
.highlights {
  padding: var(--space-20) var(--space-4);
  background-color: var(--surface);
}

.section-header {
  text-align: center;
  margin-bottom: var(--space-16);
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
  color: var(--text-primary);
}

.section-title .accent {
  color: var(--text-accent);
}

.section-lead {
  font-size: 1.125rem;
  color: var(--text-secondary);
  max-width: 48rem;
  margin: 0 auto;
}

.highlight-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-8);
}

@media (min-width: 768px) {
  .highlight-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (min-width: 1024px) {
  .highlight-grid {
    grid-template-columns: repeat(3, 1fr);
  }
}

.highlight-card {
  background-color: var(--background);
  padding: var(--space-8);
  border-radius: var(--radius-lg);
  border: 1px solid var(--border-soft);
  box-shadow: var(--shadow-lg);
  text-align: center;
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard),
              border-color var(--transition-normal) var(--easing-standard);
}

.highlight-card:hover {
  transform: translateY(-4px);
  box-shadow: var(--shadow-xl);
  border-color: var(--primary-light);
}

.highlight-icon {
  width: 64px;
  height: 64px;
  margin: 0 auto var(--space-4);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 2.5rem;
  border-radius: var(--radius-full);
  background-color: var(--tint);
}

.highlight-title {
  font-size: 1.25rem;
  font-weight: 700;
  margin-bottom: var(--space-3);
  color: var(--text-primary);
}

.highlight-desc {
  color: var(--text-secondary);
}

/* Call to action */
.cta {
  padding: var(--space-20) var(--space-4);
  text-align: center;
  background: linear-gradient(to right, var(--primary-dark), var(--accent));
  color: var(--text-inverse);
}

.cta-title {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.cta-lead {
  font-size: 1.125rem;
  max-width: 42rem;
  margin: 0 auto var(--space-8);
  opacity: 0.9;
}

.cta .btn {
  background-color: #FFFFFF;
  color: var(--primary-dark);
}
"#;
