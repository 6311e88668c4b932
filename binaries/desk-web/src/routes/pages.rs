//! Server-rendered pages: login form and the review dashboard.
//!
//! The dashboard requires the auth cookie and renders the listing table
//! straight from the store; approve/reject/edit run client-side against
//! the JSON API and patch the affected row in place.

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::get;
use axum::Router;

use desk_core::Listing;

use crate::routes::{has_auth_cookie, html_escape};
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/login", get(login_page))
        .route("/dashboard", get(dashboard))
}

const CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{background:#0d1117;color:#c9d1d9;font-family:'Segoe UI',system-ui,sans-serif}
.nav{background:#161b22;border-bottom:1px solid #30363d;padding:0.75rem 2rem;display:flex;align-items:center;gap:2rem}
.nav h1{font-size:1.2rem;color:#f0f6fc}
.nav .sub{color:#8b949e;font-size:0.85rem}
.container{max-width:1100px;margin:0 auto;padding:2rem 1.5rem}
.panel{background:#161b22;border:1px solid #30363d;border-radius:8px;padding:1.5rem}
.panel.empty{padding:3rem;text-align:center;color:#8b949e;font-size:1.1rem}
h2{color:#f0f6fc;margin-bottom:0.25rem}
.page-sub{color:#8b949e;font-size:0.9rem;margin-bottom:1.5rem}
table{width:100%;border-collapse:collapse}
th,td{padding:0.75rem;text-align:left;border-bottom:1px solid #21262d;vertical-align:top}
th{color:#8b949e;font-weight:600;font-size:0.8rem;text-transform:uppercase;letter-spacing:0.05em}
tr:hover td{background:#1c2128}
.status-badge{display:inline-block;padding:2px 10px;border-radius:999px;font-size:0.8rem;font-weight:600}
.status-pending{background:#7d4e00;color:#f0c000}
.status-approved{background:#1a4731;color:#3fb950}
.status-rejected{background:#67060c;color:#ff7b72}
.actions{display:flex;gap:1rem}
button.link{background:none;border:none;cursor:pointer;font-size:0.9rem;font-weight:600;padding:0}
button.link:disabled{opacity:0.4;cursor:not-allowed}
button.link.approve{color:#3fb950}
button.link.reject{color:#ff7b72}
button.link.edit{color:#58a6ff}
.row-error{color:#ff7b72;font-size:0.8rem;margin-top:0.4rem;min-height:1em}
.login-card{max-width:380px;margin:10vh auto;background:#161b22;border:1px solid #30363d;border-radius:8px;padding:2rem}
.form-group{margin-bottom:1rem}
.form-group label{display:block;color:#8b949e;font-size:0.85rem;margin-bottom:0.25rem}
input{background:#0d1117;color:#c9d1d9;border:1px solid #30363d;border-radius:6px;padding:0.5rem;font-size:0.9rem;width:100%}
.btn{background:#238636;color:#fff;border:none;padding:0.5rem 1rem;border-radius:6px;cursor:pointer;font-size:0.9rem;width:100%}
.btn:hover{background:#2ea043}
.btn:disabled{opacity:0.6;cursor:not-allowed}
.btn-outline{background:transparent;border:1px solid #30363d;color:#c9d1d9;width:auto}
.btn-save{width:auto}
.form-error{color:#ff7b72;font-size:0.85rem;margin-bottom:0.75rem;min-height:1em}
.modal-overlay{display:none;position:fixed;inset:0;background:rgba(0,0,0,0.6);align-items:center;justify-content:center}
.modal{background:#161b22;border:1px solid #30363d;border-radius:8px;padding:1.5rem;max-width:400px;width:100%}
.modal h3{color:#f0f6fc;margin-bottom:1rem}
.modal-buttons{display:flex;justify-content:flex-end;gap:0.75rem;margin-top:1rem}
"#;

fn wrap(title: &str, body: &str, script: &str) -> Html<String> {
    let mut page = format!(
        r#"<!DOCTYPE html><html><head><meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title} | DriveDesk</title><style>{CSS}</style></head>
<body><nav class="nav"><h1>DriveDesk</h1><span class="sub">car rental listing review</span></nav>
{body}"#,
        title = html_escape(title),
    );
    if !script.is_empty() {
        page.push_str("<script>");
        page.push_str(script);
        page.push_str("</script>");
    }
    page.push_str("</body></html>");
    Html(page)
}

async fn index() -> Redirect {
    Redirect::temporary("/dashboard")
}

// ---------------------------------------------------------------
//  Login
// ---------------------------------------------------------------

const LOGIN_SCRIPT: &str = r#"
document.getElementById('login-form').addEventListener('submit', async (ev) => {
  ev.preventDefault();
  const errEl = document.getElementById('login-error');
  const btn = document.getElementById('login-btn');
  errEl.textContent = '';
  btn.disabled = true;
  btn.textContent = 'Signing in...';
  try {
    const resp = await fetch('/api/auth/login', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({
        email: document.getElementById('email').value,
        password: document.getElementById('password').value,
      }),
    });
    const body = await resp.json();
    if (!resp.ok || !body.success) {
      throw new Error(body.message || 'Login failed');
    }
    window.location.href = '/dashboard';
  } catch (err) {
    errEl.textContent = err instanceof TypeError ? 'Network error (code 0)' : err.message;
    btn.disabled = false;
    btn.textContent = 'Sign in';
  }
});
"#;

async fn login_page() -> Html<String> {
    let body = r#"<div class="login-card">
  <h2>Operator sign in</h2>
  <p class="page-sub">Review car rental submissions</p>
  <div class="form-error" id="login-error"></div>
  <form id="login-form">
    <div class="form-group"><label for="email">Email</label><input type="email" id="email" required></div>
    <div class="form-group"><label for="password">Password</label><input type="password" id="password" required></div>
    <button class="btn" type="submit" id="login-btn">Sign in</button>
  </form>
</div>"#;
    wrap("Sign in", body, LOGIN_SCRIPT)
}

// ---------------------------------------------------------------
//  Dashboard
// ---------------------------------------------------------------

const DASHBOARD_SCRIPT: &str = r#"
const inflight = {};

function row(id) { return document.getElementById('row-' + id); }

function setRowError(id, msg) {
  const el = document.getElementById('error-' + id);
  if (el) el.textContent = msg;
}

function refreshButtons(id) {
  const r = row(id);
  if (!r) return;
  const busy = !!inflight[id];
  const status = r.dataset.status;
  r.querySelector('.approve').disabled = busy || status === 'approved';
  r.querySelector('.reject').disabled = busy || status === 'rejected';
  r.querySelector('.edit').disabled = busy;
}

function applyRow(listing) {
  const r = row(listing.id);
  if (!r) return;
  r.dataset.status = listing.status;
  r.querySelector('.title').textContent = listing.title;
  r.querySelector('.location').textContent = listing.location;
  r.querySelector('.price').textContent = '$' + listing.price + '/day';
  const badge = r.querySelector('.status-badge');
  badge.className = 'status-badge status-' + listing.status;
  badge.textContent = listing.status.charAt(0).toUpperCase() + listing.status.slice(1);
  refreshButtons(listing.id);
}

async function setStatus(id, action) {
  setRowError(id, '');
  inflight[id] = true;
  refreshButtons(id);
  try {
    const resp = await fetch('/api/listings/' + id + '/' + action, { method: 'POST' });
    const body = await resp.json();
    if (!resp.ok || !body.success) {
      throw new Error(body.message || 'Failed to update status');
    }
    applyRow(body.data);
  } catch (err) {
    setRowError(id, err instanceof TypeError ? 'Network error (code 0)' : err.message);
  } finally {
    inflight[id] = false;
    refreshButtons(id);
  }
}

function openEdit(id) {
  const r = row(id);
  if (!r) return;
  document.getElementById('edit-id').value = id;
  document.getElementById('edit-title').value = r.querySelector('.title').textContent;
  document.getElementById('edit-location').value = r.querySelector('.location').textContent;
  document.getElementById('edit-price').value =
    parseFloat(r.querySelector('.price').textContent.replace(/[^0-9.\-]/g, '')) || 0;
  document.getElementById('edit-error').textContent = '';
  document.getElementById('edit-modal').style.display = 'flex';
}

function closeEdit() {
  document.getElementById('edit-modal').style.display = 'none';
}

document.getElementById('edit-form').addEventListener('submit', async (ev) => {
  ev.preventDefault();
  const id = document.getElementById('edit-id').value;
  const saveBtn = document.getElementById('edit-save');
  const errEl = document.getElementById('edit-error');
  errEl.textContent = '';
  saveBtn.disabled = true;
  saveBtn.textContent = 'Saving...';
  try {
    const resp = await fetch('/api/listings/' + id + '/edit', {
      method: 'PUT',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({
        title: document.getElementById('edit-title').value,
        location: document.getElementById('edit-location').value,
        price: Number(document.getElementById('edit-price').value),
      }),
    });
    const body = await resp.json();
    if (!resp.ok || !body.success) {
      throw new Error(body.message || 'Failed to update listing');
    }
    applyRow(body.data);
    closeEdit();
  } catch (err) {
    errEl.textContent = err instanceof TypeError ? 'Network error (code 0)' : err.message;
  } finally {
    saveBtn.disabled = false;
    saveBtn.textContent = 'Save changes';
  }
});

document.querySelectorAll('tr[data-id]').forEach((r) => refreshButtons(r.dataset.id));
"#;

fn listing_row(l: &Listing) -> String {
    let id = html_escape(&l.id);
    let status = l.status.as_str();
    format!(
        r#"<tr id="row-{id}" data-id="{id}" data-status="{status}">
  <td class="title">{title}</td>
  <td class="location">{location}</td>
  <td class="price">${price}/day</td>
  <td><span class="status-badge {badge}">{label}</span></td>
  <td>
    <div class="actions">
      <button class="link approve" onclick="setStatus('{id}','approve')">Approve</button>
      <button class="link reject" onclick="setStatus('{id}','reject')">Reject</button>
      <button class="link edit" onclick="openEdit('{id}')">Edit</button>
    </div>
    <div class="row-error" id="error-{id}"></div>
  </td>
</tr>"#,
        title = html_escape(&l.title),
        location = html_escape(&l.location),
        price = l.price,
        badge = l.status.badge_class(),
        label = l.status.label(),
    )
}

const EDIT_MODAL: &str = r#"<div class="modal-overlay" id="edit-modal">
  <div class="modal">
    <h3>Edit Listing</h3>
    <div class="form-error" id="edit-error"></div>
    <form id="edit-form">
      <input type="hidden" id="edit-id">
      <div class="form-group"><label for="edit-title">Title</label><input type="text" id="edit-title" required></div>
      <div class="form-group"><label for="edit-location">Location</label><input type="text" id="edit-location" required></div>
      <div class="form-group"><label for="edit-price">Price per day ($)</label><input type="number" id="edit-price" required min="0" step="any"></div>
      <div class="modal-buttons">
        <button class="btn btn-outline" type="button" onclick="closeEdit()">Cancel</button>
        <button class="btn btn-save" type="submit" id="edit-save">Save changes</button>
      </div>
    </form>
  </div>
</div>"#;

async fn dashboard(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if !has_auth_cookie(&headers) {
        return Redirect::temporary("/login").into_response();
    }

    let store = state.store.read().await;

    let mut body = String::from(
        r#"<div class="container">
<h2>Car Listings</h2>
<p class="page-sub">Manage and update car rental submissions</p>
"#,
    );

    if store.is_empty() {
        body.push_str(r#"<div class="panel empty">No listings available</div>"#);
    } else {
        body.push_str(
            r#"<div class="panel"><table>
<thead><tr><th>Title</th><th>Location</th><th>Price</th><th>Status</th><th>Actions</th></tr></thead>
<tbody>"#,
        );
        for listing in store.listings() {
            body.push_str(&listing_row(listing));
        }
        body.push_str("</tbody></table></div>");
    }

    body.push_str("</div>");
    body.push_str(EDIT_MODAL);

    wrap("Car Listings", &body, DASHBOARD_SCRIPT).into_response()
}
