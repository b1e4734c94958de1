pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #059669;          /* emerald, home page accents */
  --primary-light: #34D399;
  --primary-dark: #047857;
  --secondary: #4F46E5;        /* indigo, projects and contact accents */
  --secondary-light: #818CF8;
  --secondary-dark: #4338CA;
  --accent: #0D9488;           /* teal end of the call-to-action gradient */

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Semantic Colors */
  --success: #22C55E;
  --error: #B91C1C;
  --error-surface: #FEE2E2;

  /* Background and Surface Colors */
  --background: var(--neutral-50);
  --surface: #FFFFFF;
  --surface-muted: var(--neutral-100);
  --surface-inset: var(--neutral-200);
  --tint: #D1FAE5;

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-700);
  --text-tertiary: var(--neutral-500);
  --text-inverse: #FFFFFF;
  --text-accent: var(--primary);
  --text-link: var(--secondary);

  /* Border Colors */
  --border: var(--neutral-300);
  --border-soft: var(--neutral-200);

  /* Layout */
  --header-height: 64px;
  --container-width: 1280px;
  --narrow-width: 1152px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;
  --space-20: 80px;

  /* Border Radius */
  --radius-md: 8px;
  --radius-lg: 12px;
  --radius-xl: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
  --shadow-xl: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* Dark scheme, toggled by the "dark" class on <html> */
:root.dark {
  --primary: #34D399;
  --secondary: #818CF8;

  --background: var(--neutral-900);
  --surface: var(--neutral-800);
  --surface-muted: var(--neutral-700);
  --surface-inset: #000000;
  --tint: rgba(6, 78, 59, 0.2);

  --text-primary: #FFFFFF;
  --text-secondary: var(--neutral-300);
  --text-tertiary: var(--neutral-400);

  --error: #F87171;
  --error-surface: rgba(127, 29, 29, 0.2);

  --border: var(--neutral-600);
  --border-soft: var(--neutral-700);
}"#;
