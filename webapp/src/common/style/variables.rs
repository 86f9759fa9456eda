pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand */
  --primary: #0D9488;
  --primary-light: #2DD4BF;
  --primary-dark: #0F766E;
  --accent: #F59E0B;

  /* Surfaces and text (light scheme) */
  --background: #F8FAF9;
  --surface: #FFFFFF;
  --surface-raised: #FFFFFF;
  --text-primary: #10201D;
  --text-secondary: #4A5D58;
  --text-inverse: #FFFFFF;
  --border: #DCE5E2;

  /* Semantic */
  --success: #15803D;
  --overlay: rgba(16, 32, 29, 0.55);

  /* Elevation */
  --shadow-sm: 0 1px 2px rgba(16, 32, 29, 0.08);
  --shadow-md: 0 6px 18px rgba(16, 32, 29, 0.14);
  --shadow-lg: 0 16px 40px rgba(16, 32, 29, 0.2);

  /* Layout */
  --nav-height: 64px;
  --container-width: 1140px;

  /* Spacing */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;

  /* Radii */
  --radius-md: 8px;
  --radius-lg: 14px;
  --radius-full: 999px;
}

[data-theme="dark"] {
  --background: #0E1513;
  --surface: #16211E;
  --surface-raised: #1C2A26;
  --text-primary: #E7F0ED;
  --text-secondary: #9FB4AE;
  --border: #273631;
  --overlay: rgba(0, 0, 0, 0.65);
  --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.4);
  --shadow-md: 0 6px 18px rgba(0, 0, 0, 0.5);
  --shadow-lg: 0 16px 40px rgba(0, 0, 0, 0.6);
}
"#;
