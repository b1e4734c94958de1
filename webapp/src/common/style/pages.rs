pub const PAGE_STYLES: &str = r#"
/* Projects */
.featured {
  margin-bottom: var(--space-20);
  border-radius: var(--radius-xl);
}

.featured-body {
  display: grid;
  grid-template-columns: 1fr;
}

@media (min-width: 1024px) {
  .featured-body {
    grid-template-columns: 1fr 1fr;
  }
}

.featured-image {
  min-height: 256px;
  background-color: var(--surface-muted);
}

.featured-image img,
.project-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.featured-info {
  padding: var(--space-10);
}

.project-heading {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: var(--space-4);
}

.project-title {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--text-primary);
}

.project-links {
  display: flex;
  gap: var(--space-3);
}

.project-links a {
  color: var(--text-tertiary);
  transition: color var(--transition-fast) var(--easing-standard);
}

.project-links a:hover {
  color: var(--secondary);
}

.project-desc {
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

.project-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-8);
}

@media (min-width: 768px) {
  .project-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (min-width: 1024px) {
  .project-grid {
    grid-template-columns: repeat(3, 1fr);
  }
}

.project-image {
  height: 192px;
  background-color: var(--surface-muted);
}

.project-info {
  padding: var(--space-6);
}

.project-info .project-title {
  font-size: 1.25rem;
}

.project-info .project-desc {
  font-size: 0.875rem;
  margin-bottom: var(--space-4);
}

.closing {
  text-align: center;
  margin-top: var(--space-16);
  color: var(--text-secondary);
}

.closing p {
  margin-bottom: var(--space-6);
}

/* Contact */
.contact-layout {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-10);
}

@media (min-width: 768px) {
  .contact-layout {
    grid-template-columns: 1fr 2fr;
  }
}

.panel {
  padding: var(--space-8);
  height: 100%;
}

.panel-title {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-6);
  color: var(--text-primary);
}

.contact-item {
  display: flex;
  align-items: flex-start;
  gap: var(--space-4);
  margin-bottom: var(--space-6);
}

.contact-icon {
  font-size: 1.5rem;
  color: var(--secondary);
}

.contact-item h3 {
  font-weight: 500;
  color: var(--text-primary);
}

.contact-item p {
  color: var(--text-secondary);
}

.availability {
  margin-top: var(--space-8);
  padding: var(--space-4);
  border-radius: var(--radius-md);
  background-color: var(--surface-inset);
}

.availability h3 {
  font-weight: 500;
  margin-bottom: var(--space-2);
  color: var(--text-primary);
}

.availability p {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.sent-panel {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: var(--space-12) 0;
  text-align: center;
}

.sent-icon {
  font-size: 4rem;
  color: var(--success);
  margin-bottom: var(--space-6);
}

.sent-panel h3 {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-2);
  color: var(--text-primary);
}

.sent-panel p {
  max-width: 28rem;
  color: var(--text-secondary);
}

.form-stack {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

/* Registration demo and not found */
.narrow-card {
  max-width: 32rem;
  margin: 0 auto;
  padding: var(--space-8);
}

.notice {
  text-align: center;
  padding: var(--space-20) var(--space-4);
}

.notice h1 {
  font-size: 4rem;
  font-weight: 700;
  color: var(--secondary);
}

.notice p {
  color: var(--text-secondary);
  margin-bottom: var(--space-8);
}
"#;
