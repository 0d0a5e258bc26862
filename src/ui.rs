use crate::progress::DEFAULT_TARGET_DAYS;

pub fn render_index() -> String {
    INDEX_HTML.replace("{{DEFAULT_TARGET}}", &DEFAULT_TARGET_DAYS.to_string())
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Teal Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #0f1b24;
      --bg-2: #13313b;
      --ink: #e8f1f2;
      --muted: #8fa8ad;
      --accent: #06b6d4;
      --accent-2: #14b8a6;
      --danger: #e2574c;
      --card: rgba(255, 255, 255, 0.05);
      --line: rgba(232, 241, 242, 0.1);
      --shadow: 0 24px 60px rgba(4, 14, 18, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 65%),
        linear-gradient(150deg, var(--bg-1), #0c2230 55%, #0f1b24 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border: 1px solid var(--line);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.5rem);
      margin: 0;
    }

    h1 .dot {
      color: var(--accent);
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
      font-size: 1rem;
    }

    .who {
      display: flex;
      align-items: center;
      gap: 14px;
      color: var(--muted);
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(6, 182, 212, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.9rem;
      font-weight: 600;
      color: var(--muted);
      cursor: pointer;
    }

    .tab.active {
      background: var(--accent);
      color: #042a33;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
      gap: 16px;
    }

    .card {
      background: rgba(255, 255, 255, 0.04);
      border: 1px solid var(--line);
      border-radius: 20px;
      padding: 20px;
      display: grid;
      gap: 12px;
      justify-items: center;
      text-align: center;
    }

    .card h3 {
      margin: 0;
      font-size: 1.1rem;
    }

    .card .desc {
      margin: 0;
      color: var(--muted);
      font-size: 0.85rem;
      min-height: 1.1em;
    }

    .ring-wrap {
      position: relative;
      width: 120px;
      height: 120px;
    }

    .ring-wrap svg {
      transform: rotate(-90deg);
    }

    .ring-bg {
      fill: none;
      stroke: rgba(255, 255, 255, 0.1);
      stroke-width: 10;
    }

    .ring-fg {
      fill: none;
      stroke-width: 10;
      stroke-linecap: round;
      transition: stroke-dashoffset 500ms ease;
    }

    .ring-label {
      position: absolute;
      inset: 0;
      display: grid;
      place-items: center;
      font-weight: 600;
    }

    .ring-label .days {
      font-size: 1.5rem;
    }

    .ring-label .pct {
      font-size: 0.8rem;
      color: var(--muted);
    }

    .rows {
      display: grid;
      gap: 12px;
    }

    .row {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      background: rgba(255, 255, 255, 0.04);
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 14px 18px;
    }

    .row .meta {
      display: flex;
      align-items: center;
      gap: 12px;
      min-width: 0;
    }

    .swatch {
      width: 14px;
      height: 14px;
      border-radius: 50%;
      flex-shrink: 0;
    }

    .row .name {
      font-weight: 600;
    }

    .row .sub {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .row .controls {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-size: 0.9rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.97);
    }

    .btn-primary {
      background: var(--accent);
      color: #042a33;
      box-shadow: 0 10px 24px rgba(6, 182, 212, 0.25);
    }

    .btn-soft {
      background: rgba(255, 255, 255, 0.08);
      color: var(--ink);
    }

    .btn-danger {
      background: transparent;
      border: 1px solid var(--danger);
      color: var(--danger);
    }

    form {
      display: grid;
      gap: 14px;
    }

    .form-card {
      background: rgba(255, 255, 255, 0.04);
      border: 1px solid var(--line);
      border-radius: 20px;
      padding: 24px;
      display: grid;
      gap: 16px;
    }

    .form-card h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    input {
      background: rgba(9, 26, 33, 0.7);
      border: 1px solid var(--line);
      border-radius: 12px;
      padding: 12px 14px;
      font-size: 1rem;
      font-family: inherit;
      color: var(--ink);
    }

    input:focus {
      outline: 2px solid var(--accent);
      border-color: transparent;
    }

    input[type='color'] {
      padding: 4px;
      height: 44px;
      width: 72px;
    }

    .split {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 14px;
    }

    .swap {
      color: var(--muted);
      font-size: 0.9rem;
      text-align: center;
    }

    .swap a {
      color: var(--accent);
      cursor: pointer;
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type='error'] {
      color: var(--danger);
    }

    .status[data-type='ok'] {
      color: var(--accent-2);
    }

    .empty {
      text-align: center;
      color: var(--muted);
      padding: 32px 0;
    }

    .hidden {
      display: none !important;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Teal Tracker<span class="dot">.</span></h1>
        <p class="subtitle">Count the days. Keep the streak.</p>
      </div>
      <div id="who" class="who hidden">
        <span id="who-name"></span>
        <button id="logout-btn" class="btn-soft" type="button">Log out</button>
      </div>
    </header>

    <section id="auth-view">
      <div class="form-card">
        <h2 id="auth-title">Log in</h2>
        <form id="login-form">
          <label>Email
            <input id="login-email" type="email" autocomplete="email" required />
          </label>
          <label>Password
            <input id="login-password" type="password" autocomplete="current-password" required />
          </label>
          <button class="btn-primary" type="submit">Log in</button>
        </form>
        <form id="register-form" class="hidden">
          <label>Name
            <input id="register-name" type="text" autocomplete="name" required />
          </label>
          <label>Email
            <input id="register-email" type="email" autocomplete="email" required />
          </label>
          <label>Password
            <input id="register-password" type="password" autocomplete="new-password" required />
          </label>
          <button class="btn-primary" type="submit">Create account</button>
        </form>
        <p class="swap" id="auth-swap">
          No account? <a id="show-register">Register</a> &middot; or try
          <a id="demo-login">demo@example.com</a> with any password
        </p>
      </div>
    </section>

    <section id="app-view" class="hidden">
      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-tab="dashboard" role="tab">Dashboard</button>
        <button class="tab" type="button" data-tab="titles" role="tab">Titles</button>
        <button class="tab" type="button" data-tab="profile" role="tab">Profile</button>
      </div>

      <div id="tab-dashboard">
        <div id="dashboard-grid" class="grid"></div>
        <div id="dashboard-empty" class="empty hidden">
          Create your first tracking title to start monitoring your progress.
        </div>
      </div>

      <div id="tab-titles" class="hidden">
        <div class="form-card">
          <h2 id="item-form-title">New title</h2>
          <form id="item-form">
            <label>Title name
              <input id="item-name" type="text" required />
            </label>
            <label>Description (optional)
              <input id="item-description" type="text" />
            </label>
            <div class="split">
              <label>Target days (default {{DEFAULT_TARGET}})
                <input id="item-target" type="number" min="1" />
              </label>
              <label>Color
                <input id="item-color" type="color" />
              </label>
            </div>
            <div class="split">
              <button class="btn-primary" type="submit" id="item-submit">Add title</button>
              <button class="btn-soft hidden" type="button" id="item-cancel">Cancel edit</button>
            </div>
          </form>
        </div>
        <div id="items-rows" class="rows" style="margin-top: 16px"></div>
      </div>

      <div id="tab-profile" class="hidden">
        <div class="form-card">
          <h2>Profile</h2>
          <form id="profile-form">
            <label>Name
              <input id="profile-name" type="text" required />
            </label>
            <label>Email
              <input id="profile-email" type="email" required />
            </label>
            <button class="btn-primary" type="submit">Save profile</button>
          </form>
        </div>
        <div class="form-card" style="margin-top: 16px">
          <h2>Change password</h2>
          <form id="password-form">
            <label>Current password
              <input id="password-current" type="password" autocomplete="current-password" />
            </label>
            <label>New password
              <input id="password-new" type="password" autocomplete="new-password" required />
            </label>
            <button class="btn-primary" type="submit">Update password</button>
          </form>
        </div>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const TOKEN_KEY = 'teal_tracker_token';
    const DEFAULT_COLOR = '#06b6d4';

    const statusEl = document.getElementById('status');
    const authView = document.getElementById('auth-view');
    const appView = document.getElementById('app-view');
    const whoEl = document.getElementById('who');
    const whoNameEl = document.getElementById('who-name');
    const dashboardGrid = document.getElementById('dashboard-grid');
    const dashboardEmpty = document.getElementById('dashboard-empty');
    const itemsRows = document.getElementById('items-rows');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let token = localStorage.getItem(TOKEN_KEY);
    let user = null;
    let items = [];
    let editingId = null;
    let statusTimer = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      clearTimeout(statusTimer);
      if (type === 'ok') {
        statusTimer = setTimeout(() => setStatus('', ''), 1500);
      }
    };

    const api = async (path, options = {}) => {
      const headers = { 'content-type': 'application/json' };
      if (token) {
        headers.authorization = 'Bearer ' + token;
      }
      const res = await fetch(path, { ...options, headers });
      if (res.status === 401) {
        token = null;
        localStorage.removeItem(TOKEN_KEY);
        showAuth();
        throw new Error('Session expired, please log in again');
      }
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const esc = (text) =>
      String(text ?? '').replace(/[&<>'"]/g, (ch) => '&#' + ch.charCodeAt(0) + ';');

    const ring = (item) => {
      const size = 120;
      const strokeWidth = 10;
      const radius = (size - strokeWidth) / 2;
      const circumference = 2 * Math.PI * radius;
      const offset = circumference - (item.percentage / 100) * circumference;
      const color = item.color || DEFAULT_COLOR;
      return `
        <div class="ring-wrap">
          <svg width="${size}" height="${size}">
            <circle class="ring-bg" cx="${size / 2}" cy="${size / 2}" r="${radius}" />
            <circle class="ring-fg" cx="${size / 2}" cy="${size / 2}" r="${radius}"
              stroke="${esc(color)}"
              stroke-dasharray="${circumference.toFixed(2)}"
              stroke-dashoffset="${offset.toFixed(2)}" />
          </svg>
          <div class="ring-label">
            <div>
              <div class="days">${item.elapsed_days}</div>
              <div class="pct">${item.percentage}% of ${item.target_days || {{DEFAULT_TARGET}}}d</div>
            </div>
          </div>
        </div>`;
    };

    const renderDashboard = () => {
      dashboardEmpty.classList.toggle('hidden', items.length > 0);
      dashboardGrid.innerHTML = items
        .map(
          (item) => `
            <div class="card">
              ${ring(item)}
              <h3>${esc(item.name)}</h3>
              <p class="desc">${esc(item.description || '')}</p>
            </div>`
        )
        .join('');
    };

    const renderRows = () => {
      itemsRows.innerHTML = items
        .map(
          (item) => `
            <div class="row" data-id="${item.id}">
              <div class="meta">
                <span class="swatch" style="background: ${esc(item.color || DEFAULT_COLOR)}"></span>
                <div>
                  <div class="name">${esc(item.name)}</div>
                  <div class="sub">${item.elapsed_days} days &middot; ${item.percentage}%</div>
                </div>
              </div>
              <div class="controls">
                <button class="btn-soft" data-action="increment" type="button">+1 day</button>
                <button class="btn-soft" data-action="decrement" type="button">-1 day</button>
                <button class="btn-soft" data-action="reset" type="button">Reset</button>
                <button class="btn-soft" data-action="edit" type="button">Edit</button>
                <button class="btn-danger" data-action="delete" type="button">Delete</button>
              </div>
            </div>`
        )
        .join('');
    };

    const render = () => {
      renderDashboard();
      renderRows();
    };

    const loadItems = async () => {
      items = await api('/api/items');
      render();
    };

    const showAuth = () => {
      authView.classList.remove('hidden');
      appView.classList.add('hidden');
      whoEl.classList.add('hidden');
    };

    const showApp = () => {
      authView.classList.add('hidden');
      appView.classList.remove('hidden');
      whoEl.classList.remove('hidden');
      whoNameEl.textContent = user ? user.name : '';
      document.getElementById('profile-name').value = user ? user.name : '';
      document.getElementById('profile-email').value = user ? user.email : '';
    };

    const enterSession = async (session) => {
      token = session.token;
      user = session.user;
      localStorage.setItem(TOKEN_KEY, token);
      await loadItems();
      showApp();
      setStatus('Welcome, ' + user.name, 'ok');
    };

    const resetItemForm = () => {
      editingId = null;
      document.getElementById('item-form').reset();
      document.getElementById('item-color').value = DEFAULT_COLOR;
      document.getElementById('item-form-title').textContent = 'New title';
      document.getElementById('item-submit').textContent = 'Add title';
      document.getElementById('item-cancel').classList.add('hidden');
    };

    const startEdit = (item) => {
      editingId = item.id;
      document.getElementById('item-name').value = item.name;
      document.getElementById('item-description').value = item.description || '';
      document.getElementById('item-target').value = item.target_days || '';
      document.getElementById('item-color').value = item.color || DEFAULT_COLOR;
      document.getElementById('item-form-title').textContent = 'Edit title';
      document.getElementById('item-submit').textContent = 'Save changes';
      document.getElementById('item-cancel').classList.remove('hidden');
    };

    const setActiveTab = (name) => {
      tabs.forEach((button) => {
        button.classList.toggle('active', button.dataset.tab === name);
      });
      document.getElementById('tab-dashboard').classList.toggle('hidden', name !== 'dashboard');
      document.getElementById('tab-titles').classList.toggle('hidden', name !== 'titles');
      document.getElementById('tab-profile').classList.toggle('hidden', name !== 'profile');
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    document.getElementById('show-register').addEventListener('click', () => {
      document.getElementById('login-form').classList.toggle('hidden');
      document.getElementById('register-form').classList.toggle('hidden');
      const showingRegister = !document.getElementById('register-form').classList.contains('hidden');
      document.getElementById('auth-title').textContent = showingRegister ? 'Register' : 'Log in';
      document.getElementById('show-register').textContent = showingRegister ? 'Log in' : 'Register';
    });

    document.getElementById('demo-login').addEventListener('click', () => {
      document.getElementById('login-email').value = 'demo@example.com';
      document.getElementById('login-password').value = 'demo';
    });

    document.getElementById('login-form').addEventListener('submit', (event) => {
      event.preventDefault();
      api('/api/auth/login', {
        method: 'POST',
        body: JSON.stringify({
          email: document.getElementById('login-email').value,
          password: document.getElementById('login-password').value
        })
      })
        .then(enterSession)
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('register-form').addEventListener('submit', (event) => {
      event.preventDefault();
      api('/api/auth/register', {
        method: 'POST',
        body: JSON.stringify({
          name: document.getElementById('register-name').value,
          email: document.getElementById('register-email').value,
          password: document.getElementById('register-password').value
        })
      })
        .then(enterSession)
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('logout-btn').addEventListener('click', () => {
      api('/api/auth/logout', { method: 'POST' })
        .catch(() => {})
        .finally(() => {
          token = null;
          user = null;
          items = [];
          localStorage.removeItem(TOKEN_KEY);
          showAuth();
          setStatus('Logged out', 'ok');
        });
    });

    document.getElementById('item-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const target = document.getElementById('item-target').value;
      const body = {
        name: document.getElementById('item-name').value,
        description: document.getElementById('item-description').value,
        color: document.getElementById('item-color').value,
        ...(target ? { target_days: parseInt(target, 10) } : {})
      };
      const request = editingId
        ? api('/api/items/' + editingId, { method: 'PUT', body: JSON.stringify(body) })
        : api('/api/items', { method: 'POST', body: JSON.stringify(body) });
      request
        .then(() => {
          setStatus(editingId ? 'Title updated' : 'Title added', 'ok');
          resetItemForm();
          return loadItems();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('item-cancel').addEventListener('click', resetItemForm);

    itemsRows.addEventListener('click', (event) => {
      const button = event.target.closest('button[data-action]');
      if (!button) {
        return;
      }
      const id = button.closest('.row').dataset.id;
      const action = button.dataset.action;
      const item = items.find((entry) => entry.id === id);

      if (action === 'edit') {
        startEdit(item);
        return;
      }
      if (action === 'delete') {
        if (!confirm('Delete "' + item.name + '"? The day count will be lost.')) {
          return;
        }
        api('/api/items/' + id, { method: 'DELETE' })
          .then(() => {
            setStatus('Title deleted', 'ok');
            return loadItems();
          })
          .catch((err) => setStatus(err.message, 'error'));
        return;
      }
      if (action === 'reset' && !confirm('Reset "' + item.name + '" to day zero?')) {
        return;
      }
      api('/api/items/' + id + '/' + action, { method: 'POST' })
        .then(() => loadItems())
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('profile-form').addEventListener('submit', (event) => {
      event.preventDefault();
      api('/api/auth/profile', {
        method: 'PUT',
        body: JSON.stringify({
          name: document.getElementById('profile-name').value,
          email: document.getElementById('profile-email').value
        })
      })
        .then((profile) => {
          user = profile;
          showApp();
          setStatus('Profile updated', 'ok');
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('password-form').addEventListener('submit', (event) => {
      event.preventDefault();
      api('/api/auth/password', {
        method: 'PUT',
        body: JSON.stringify({
          current_password: document.getElementById('password-current').value,
          new_password: document.getElementById('password-new').value
        })
      })
        .then(() => {
          document.getElementById('password-form').reset();
          setStatus('Password updated', 'ok');
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    const boot = async () => {
      resetItemForm();
      if (!token) {
        showAuth();
        return;
      }
      try {
        user = await api('/api/auth/me');
        await loadItems();
        showApp();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    boot();
  </script>
</body>
</html>
"##;
