pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-3) var(--space-8);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  border: 1px solid transparent;
  box-shadow: var(--shadow-md);
  transition: background-color var(--transition-normal) var(--easing-standard),
              transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.btn:hover {
  box-shadow: var(--shadow-lg);
  text-decoration: none;
}

.btn-grow:hover {
  transform: scale(1.05);
}

.btn-primary {
  background-color: var(--primary-dark);
  color: var(--text-inverse);
}

.btn-primary:hover {
  background-color: #065F46;
}

.btn-outline {
  background-color: var(--surface);
  color: var(--primary);
  border-color: var(--primary);
}

.btn-outline:hover {
  background-color: var(--surface-muted);
}

.btn-indigo {
  background-color: var(--secondary);
  color: var(--text-inverse);
}

.btn-indigo:hover {
  background-color: var(--secondary-dark);
}

.btn-block {
  width: 100%;
}

.btn[disabled] {
  opacity: 0.7;
  cursor: not-allowed;
}

.icon-button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 48px;
  height: 48px;
  border-radius: var(--radius-full);
  background-color: var(--surface-muted);
  color: var(--text-secondary);
  border: none;
  cursor: pointer;
  font-size: 1.25rem;
  box-shadow: var(--shadow-md);
  transition: transform var(--transition-normal) var(--easing-standard),
              background-color var(--transition-normal) var(--easing-standard);
}

.icon-button:hover {
  background-color: var(--tint);
  transform: scale(1.1);
  text-decoration: none;
}

/* Cards */
.card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
  overflow: hidden;
  transition: box-shadow var(--transition-normal) var(--easing-standard),
              transform var(--transition-normal) var(--easing-standard);
}

.card:hover {
  box-shadow: var(--shadow-xl);
}

/* Form Elements */
.form-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-6);
}

@media (min-width: 768px) {
  .form-grid.two-up {
    grid-template-columns: 1fr 1fr;
  }
}

.form-label {
  display: block;
  margin-bottom: var(--space-1);
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.form-input,
.form-textarea {
  width: 100%;
  padding: var(--space-2) var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
  font: inherit;
}

.form-input:focus,
.form-textarea:focus {
  border-color: var(--secondary);
  box-shadow: 0 0 0 2px var(--secondary-light);
  outline: none;
}

.form-textarea {
  resize: vertical;
}

.alert-error {
  background-color: var(--error-surface);
  color: var(--error);
  padding: var(--space-4);
  margin-bottom: var(--space-6);
  border-radius: var(--radius-md);
}

.spinner {
  width: 18px;
  height: 18px;
  border: 3px solid rgba(255, 255, 255, 0.3);
  border-top-color: #FFFFFF;
  border-radius: var(--radius-full);
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* Tags */
.tag {
  padding: var(--space-1) var(--space-3);
  background-color: var(--surface-muted);
  border-radius: var(--radius-full);
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.tag-sm {
  padding: var(--space-1) var(--space-2);
  font-size: 0.75rem;
}

.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

/* Entrance animations */
.fade-in {
  animation: fade-in 0.8s var(--easing-standard) both;
}

.fade-in-up {
  animation: fade-in-up 0.5s var(--easing-standard) both;
}

.fade-in-left {
  animation: fade-in-left 0.5s var(--easing-standard) both;
}

.fade-in-right {
  animation: fade-in-right 0.5s var(--easing-standard) both;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes fade-in-up {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in-left {
  from { opacity: 0; transform: translateX(-20px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes fade-in-right {
  from { opacity: 0; transform: translateX(20px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes bounce {
  0%, 100% { transform: translate(-50%, -25%); }
  50% { transform: translate(-50%, 0); }
}

/* Layout utilities */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.container.narrow {
  max-width: var(--narrow-width);
}

.page {
  min-height: 100vh;
  padding: var(--space-20) 0;
}

.page-header {
  text-align: center;
  margin-bottom: var(--space-16);
}

.page-title {
  font-size: 2.75rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
  color: var(--text-primary);
}

.page-title .accent {
  color: var(--secondary);
}

.page-lead {
  font-size: 1.125rem;
  color: var(--text-secondary);
  max-width: 48rem;
  margin: 0 auto;
}
"#;
