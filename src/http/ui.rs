//! UI route handler for the inventory front end.
//!
//! The whole page is one static HTML/JS document doing fetch-based CRUD
//! against `/books` — no build step, no assets.

use axum::response::Html;

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Bookshelf</title>
  <style>
    *, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
    body {
      font-family: system-ui, -apple-system, sans-serif;
      background: #0f0f0f; color: #e0e0e0;
      max-width: 720px; margin: 0 auto; padding: 2rem 1rem;
    }
    h1 { font-size: 1.5rem; margin-bottom: 0.25rem; }
    p.sub { font-size: 0.9rem; color: #888; margin-bottom: 1.5rem; }
    form {
      display: flex; gap: 0.5rem; flex-wrap: wrap; margin-bottom: 1.5rem;
      padding: 1rem; border: 1px solid #333; border-radius: 12px; background: #1a1a1a;
    }
    input {
      flex: 1 1 8rem; padding: 0.5rem; border-radius: 8px;
      border: 1px solid #333; background: #222; color: #e0e0e0;
    }
    input#year { flex: 0 1 6rem; }
    button {
      padding: 0.5rem 1.25rem; border: none; border-radius: 8px;
      background: #2a2a3a; color: #c0c0e0; cursor: pointer;
    }
    button:hover { background: #3a3a5a; }
    table { width: 100%; border-collapse: collapse; }
    th, td { text-align: left; padding: 0.5rem; border-bottom: 1px solid #2a2a2a; }
    th { color: #888; font-size: 0.85rem; }
    td.actions { text-align: right; white-space: nowrap; }
    td.actions button { padding: 0.25rem 0.75rem; font-size: 0.85rem; margin-left: 0.25rem; }
    #status { font-size: 0.85rem; color: #c07070; min-height: 1.2rem; margin-bottom: 0.5rem; }
  </style>
</head>
<body>
  <h1>Bookshelf</h1>
  <p class="sub">In-memory inventory — gone on restart.</p>

  <form id="book-form">
    <input id="title"  placeholder="Title"  required />
    <input id="author" placeholder="Author" required />
    <input id="year"   placeholder="Year" type="number" required />
    <button type="submit" id="submit">Add</button>
  </form>
  <div id="status"></div>

  <table>
    <thead><tr><th>#</th><th>Title</th><th>Author</th><th>Year</th><th></th></tr></thead>
    <tbody id="rows"></tbody>
  </table>

  <script>
    const form = document.getElementById('book-form');
    const status = document.getElementById('status');
    let editingId = null;

    async function call(method, path, body) {
      const resp = await fetch(path, {
        method,
        headers: body ? { 'Content-Type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined,
      });
      if (!resp.ok) {
        const err = await resp.json().catch(() => ({ message: resp.statusText }));
        throw new Error(err.message || 'request failed');
      }
      return resp.json();
    }

    async function refresh() {
      const books = await call('GET', '/books');
      const rows = document.getElementById('rows');
      rows.innerHTML = '';
      for (const b of books) {
        const tr = document.createElement('tr');
        tr.innerHTML =
          `<td>${b.id}</td><td></td><td></td><td>${b.year}</td>` +
          `<td class="actions"><button data-act="edit">Edit</button>` +
          `<button data-act="del">Delete</button></td>`;
        tr.children[1].textContent = b.title;
        tr.children[2].textContent = b.author;
        tr.querySelector('[data-act=edit]').onclick = () => startEdit(b);
        tr.querySelector('[data-act=del]').onclick = () =>
          call('DELETE', `/books/${b.id}`).then(refresh).catch(show);
        rows.appendChild(tr);
      }
    }

    function startEdit(b) {
      editingId = b.id;
      document.getElementById('title').value = b.title;
      document.getElementById('author').value = b.author;
      document.getElementById('year').value = b.year;
      document.getElementById('submit').textContent = `Save #${b.id}`;
    }

    function show(e) { status.textContent = e.message; }

    form.onsubmit = async (ev) => {
      ev.preventDefault();
      status.textContent = '';
      const body = {
        title: document.getElementById('title').value,
        author: document.getElementById('author').value,
        year: parseInt(document.getElementById('year').value, 10),
      };
      try {
        if (editingId === null) {
          await call('POST', '/books', body);
        } else {
          await call('PUT', `/books/${editingId}`, body);
          editingId = null;
          document.getElementById('submit').textContent = 'Add';
        }
        form.reset();
        await refresh();
      } catch (e) { show(e); }
    };

    refresh().catch(show);
  </script>
</body>
</html>
"#;

/// GET / — the inventory page.
pub(super) async fn root() -> Html<&'static str> {
    Html(INDEX_HTML)
}
