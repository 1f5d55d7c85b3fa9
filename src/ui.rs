use crate::format::escape_html;
use crate::view::{CoursesPanel, DashboardView, DepensesPanel};

pub fn render_index(view: &DashboardView) -> String {
    INDEX_HTML
        .replace("{{DRIVER_ICON}}", &escape_html(&view.driver.icon))
        .replace("{{DRIVER_NAME}}", &escape_html(&view.driver.name))
        .replace("{{DRIVER_CAR}}", &escape_html(&view.driver.car))
        .replace("{{DRIVER_PHONE}}", &escape_html(&view.driver.phone))
        .replace("{{DRIVER_PLATE}}", &escape_html(&view.driver.plate))
        .replace("{{DRIVER_ZONE}}", &escape_html(&view.driver.zone))
        .replace("{{STATUS_LABEL}}", view.status.label)
        .replace("{{PILL_CLASS}}", view.status.pill_class)
        .replace("{{BADGE_CLASS}}", view.status.badge_class)
        .replace("{{TAB_COURSES}}", active_class(view.tabs.courses))
        .replace("{{TAB_DEPENSES}}", active_class(view.tabs.depenses))
        .replace("{{TAB_PROFIL}}", active_class(view.tabs.profil))
        .replace("{{COURSES_TOTAL}}", &view.courses.total_label)
        .replace("{{COURSES_COUNT}}", &view.courses.count_label)
        .replace("{{DEPENSES_TOTAL}}", &view.depenses.total_label)
        .replace("{{DEPENSES_COUNT}}", &view.depenses.count_label)
        .replace("{{GPS_CLASS}}", view.gps.class)
        .replace("{{GPS_LABEL}}", view.gps.label)
        .replace("{{COURSES_LIST}}", &course_list(&view.courses))
        .replace("{{DEPENSES_LIST}}", &depense_list(&view.depenses))
}

fn active_class(active: bool) -> &'static str {
    if active { "active" } else { "" }
}

fn course_list(panel: &CoursesPanel) -> String {
    if panel.rows.is_empty() {
        return r#"<p class="list-empty">Aucune course pour l’instant.</p>"#.to_string();
    }

    panel
        .rows
        .iter()
        .map(|row| {
            let note = if row.note.is_empty() {
                String::new()
            } else {
                format!(" — {}", escape_html(&row.note))
            };
            format!(
                r#"<div class="list-item">
  <div>
    <div class="item-label">{amount} · {mode}</div>
    <div class="item-meta">{time}{note}</div>
  </div>
  <div class="item-amount">{amount}</div>
</div>
"#,
                amount = row.amount_label,
                mode = row.mode_label,
                time = row.time,
                note = note,
            )
        })
        .collect()
}

fn depense_list(panel: &DepensesPanel) -> String {
    if panel.rows.is_empty() {
        return r#"<p class="list-empty">Aucune dépense enregistrée.</p>"#.to_string();
    }

    panel
        .rows
        .iter()
        .map(|row| {
            format!(
                r#"<div class="list-item">
  <div>
    <div class="item-label">{label}</div>
    <div class="item-meta">{time}</div>
  </div>
  <div class="item-amount">{amount}</div>
</div>
"#,
                label = escape_html(&row.label),
                time = row.time,
                amount = row.amount_label,
            )
        })
        .collect()
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Tableau de bord chauffeur</title>
  <style>
    :root {
      --bg: #f4f5f7;
      --card: #ffffff;
      --ink: #1f2430;
      --muted: #6b7280;
      --line: #e5e7eb;
      --green: #16a34a;
      --green-soft: #dcfce7;
      --red: #dc2626;
      --red-soft: #fee2e2;
      --grey-soft: #e5e7eb;
      --accent: #2563eb;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
      display: flex;
      justify-content: center;
      padding: 24px 12px 48px;
    }

    .app {
      width: min(560px, 100%);
      display: grid;
      gap: 16px;
    }

    .inline-form {
      display: inline;
    }

    .topbar {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 14px 16px;
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .identity {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .avatar {
      font-size: 1.6rem;
    }

    .identity-text {
      display: grid;
    }

    .driver-name {
      font-weight: 600;
    }

    .driver-car {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .status-zone {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .badge {
      border-radius: 999px;
      padding: 4px 10px;
      font-size: 0.8rem;
      font-weight: 600;
    }

    .badge-online {
      background: var(--green-soft);
      color: var(--green);
    }

    .badge-offline {
      background: var(--red-soft);
      color: var(--red);
    }

    .badge-disabled {
      background: var(--grey-soft);
      color: var(--muted);
    }

    .pill {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      cursor: pointer;
      display: inline-flex;
      align-items: center;
      gap: 8px;
      color: white;
    }

    .pill-dot {
      width: 8px;
      height: 8px;
      border-radius: 999px;
      background: currentColor;
    }

    .pill.online {
      background: var(--green);
    }

    .pill.offline {
      background: var(--muted);
    }

    .tabs {
      display: flex;
      gap: 6px;
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 999px;
      padding: 6px;
    }

    .tab {
      flex: 1;
      border: none;
      background: transparent;
      border-radius: 999px;
      padding: 8px 0;
      font-size: 0.9rem;
      font-weight: 600;
      color: var(--muted);
      cursor: pointer;
    }

    .tab.active {
      background: var(--accent);
      color: white;
    }

    .tab-panel {
      display: none;
    }

    .tab-panel.active {
      display: grid;
      gap: 14px;
    }

    .kpis {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 12px;
    }

    .kpi {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 12px 14px;
      display: grid;
      gap: 4px;
    }

    .kpi-label {
      font-size: 0.8rem;
      color: var(--muted);
      text-transform: uppercase;
      letter-spacing: 0.06em;
    }

    .kpi-value {
      font-size: 1.25rem;
      font-weight: 700;
    }

    .entry-form {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 14px;
      display: grid;
      gap: 10px;
    }

    .entry-form input,
    .entry-form select {
      border: 1px solid var(--line);
      border-radius: 10px;
      padding: 10px 12px;
      font-size: 0.95rem;
    }

    .entry-form button {
      border: none;
      border-radius: 10px;
      padding: 10px 12px;
      background: var(--accent);
      color: white;
      font-weight: 600;
      font-size: 0.95rem;
      cursor: pointer;
    }

    .list {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 4px 14px;
    }

    .list-item {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      padding: 10px 0;
      border-bottom: 1px solid var(--line);
    }

    .list-item:last-child {
      border-bottom: none;
    }

    .item-label {
      font-weight: 600;
    }

    .item-meta {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .item-amount {
      font-weight: 600;
      white-space: nowrap;
    }

    .list-empty {
      color: var(--muted);
      text-align: center;
      padding: 16px 0;
    }

    .profile-card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 4px 14px;
    }

    .profile-row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 10px 0;
      border-bottom: 1px solid var(--line);
    }

    .profile-row:last-child {
      border-bottom: none;
    }

    .profile-label {
      color: var(--muted);
      font-size: 0.9rem;
    }
  </style>
</head>
<body>
  <main class="app">
    <header class="topbar">
      <div class="identity">
        <span class="avatar">{{DRIVER_ICON}}</span>
        <div class="identity-text">
          <span id="uiDriverName" class="driver-name">{{DRIVER_NAME}}</span>
          <span id="uiDriverCar" class="driver-car">{{DRIVER_CAR}}</span>
        </div>
      </div>
      <div class="status-zone">
        <span id="statusChauffeurBadge" class="badge {{BADGE_CLASS}}">{{STATUS_LABEL}}</span>
        <form method="post" action="/online/toggle" class="inline-form">
          <button id="btnToggleOnline" class="pill {{PILL_CLASS}}" type="submit">
            <span class="pill-dot"></span>
            <span id="statusLabel">{{STATUS_LABEL}}</span>
          </button>
        </form>
      </div>
    </header>

    <nav class="tabs">
      <form method="post" action="/tabs/courses" class="inline-form">
        <button class="tab {{TAB_COURSES}}" type="submit">Courses</button>
      </form>
      <form method="post" action="/tabs/depenses" class="inline-form">
        <button class="tab {{TAB_DEPENSES}}" type="submit">Dépenses</button>
      </form>
      <form method="post" action="/tabs/profil" class="inline-form">
        <button class="tab {{TAB_PROFIL}}" type="submit">Profil</button>
      </form>
    </nav>

    <section id="tab-courses" class="tab-panel {{TAB_COURSES}}">
      <div class="kpis">
        <div class="kpi">
          <span class="kpi-label">Recettes</span>
          <span id="kpiCoursesTotal" class="kpi-value">{{COURSES_TOTAL}}</span>
        </div>
        <div class="kpi">
          <span class="kpi-label">Courses</span>
          <span id="kpiCoursesCount" class="kpi-value">{{COURSES_COUNT}}</span>
        </div>
      </div>
      <form id="formCourse" method="post" action="/courses" class="entry-form">
        <input id="courseAmount" name="amount" type="number" min="1" step="1" placeholder="Montant (FCFA)" />
        <select id="courseMode" name="mode">
          <option value="cash">Cash</option>
          <option value="wave">Wave</option>
          <option value="om">Orange Money</option>
          <option value="autre">Autre</option>
        </select>
        <input id="courseNote" name="note" type="text" placeholder="Note (facultatif)" />
        <button type="submit">Ajouter la course</button>
      </form>
      <div id="listCourses" class="list">
{{COURSES_LIST}}
      </div>
    </section>

    <section id="tab-depenses" class="tab-panel {{TAB_DEPENSES}}">
      <div class="kpis">
        <div class="kpi">
          <span class="kpi-label">Dépenses</span>
          <span id="kpiDepensesTotal" class="kpi-value">{{DEPENSES_TOTAL}}</span>
        </div>
        <div class="kpi">
          <span class="kpi-label">Nombre</span>
          <span id="kpiDepensesCount" class="kpi-value">{{DEPENSES_COUNT}}</span>
        </div>
      </div>
      <form id="formDepense" method="post" action="/depenses" class="entry-form">
        <input id="depenseLabel" name="label" type="text" placeholder="Libellé (carburant, lavage…)" />
        <input id="depenseAmount" name="amount" type="number" min="1" step="1" placeholder="Montant (FCFA)" />
        <button type="submit">Ajouter la dépense</button>
      </form>
      <div id="listDepenses" class="list">
{{DEPENSES_LIST}}
      </div>
    </section>

    <section id="tab-profil" class="tab-panel {{TAB_PROFIL}}">
      <div class="profile-card">
        <div class="profile-row">
          <span class="profile-label">Nom</span>
          <span id="profilName">{{DRIVER_NAME}}</span>
        </div>
        <div class="profile-row">
          <span class="profile-label">Téléphone</span>
          <span id="profilPhone">{{DRIVER_PHONE}}</span>
        </div>
        <div class="profile-row">
          <span class="profile-label">Véhicule</span>
          <span id="profilType">{{DRIVER_CAR}}</span>
        </div>
        <div class="profile-row">
          <span class="profile-label">Immatriculation</span>
          <span id="profilPlate">{{DRIVER_PLATE}}</span>
        </div>
        <div class="profile-row">
          <span class="profile-label">Zone</span>
          <span id="profilZone">{{DRIVER_ZONE}}</span>
        </div>
        <div class="profile-row">
          <span class="profile-label">GPS</span>
          <span id="gpsStatus" class="badge {{GPS_CLASS}}">{{GPS_LABEL}}</span>
        </div>
      </div>
    </section>
  </main>
</body>
</html>
"#;
