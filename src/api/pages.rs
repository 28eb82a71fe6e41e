use serde_json::json;

use crate::utils::escape_html;

use super::ActionRequest;

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Spotifork</title>
<style>
body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
fieldset { margin-bottom: 1rem; }
.playlist input { margin: 0.2rem 0; }
#predictions li { cursor: pointer; }
</style>
</head>
<body>
<h1>Spotifork</h1>
"#;

const FOOT: &str = "</body>\n</html>\n";

const INDEX_BODY: &str = r#"<label for="actions">Action</label>
<select id="actions">
  <option value="fork">Fork</option>
  <option value="merge">Merge</option>
</select>

<form id="form-fork" method="post" action="/">
  <input type="hidden" name="action" value="fork">
  <fieldset class="playlist">
    <input name="playlist" placeholder="Playlist ID or link" required>
    <input name="owner" placeholder="Owner" required>
  </fieldset>
  <label><input type="checkbox" name="public"> Public</label>
  <button type="submit">Fork</button>
</form>

<form id="form-merge" method="post" action="/" style="display: none">
  <input type="hidden" name="action" value="merge">
  <div id="playlists">
    <fieldset class="playlist">
      <input name="playlist" placeholder="Playlist ID or link">
      <input name="owner" placeholder="Owner">
    </fieldset>
  </div>
  <button type="button" id="addPlaylist">+</button>
  <button type="button" id="removePlaylist">-</button>
  <label><input type="checkbox" name="public"> Public</label>
  <button type="submit">Merge</button>
</form>

<h2>Find a playlist</h2>
<input id="predict-name" placeholder="Playlist name">
<input id="predict-author" placeholder="Author (optional)">
<ul id="predictions"></ul>
<button type="button" id="more" style="display: none">More</button>

<script>
const forms = { fork: document.getElementById('form-fork'), merge: document.getElementById('form-merge') };
document.getElementById('actions').addEventListener('change', (e) => {
  forms.fork.style.display = e.target.value === 'fork' ? 'block' : 'none';
  forms.merge.style.display = e.target.value === 'merge' ? 'block' : 'none';
});
document.getElementById('addPlaylist').addEventListener('click', () => {
  const rows = document.querySelectorAll('#playlists .playlist');
  const row = rows[0].cloneNode(true);
  row.querySelectorAll('input').forEach((i) => { i.value = ''; });
  document.getElementById('playlists').appendChild(row);
});
document.getElementById('removePlaylist').addEventListener('click', () => {
  const rows = document.querySelectorAll('#playlists .playlist');
  if (rows.length > 1) rows[rows.length - 1].remove();
});

function prefill(pending) {
  const select = document.getElementById('actions');
  select.value = pending.action;
  select.dispatchEvent(new Event('change'));
  const form = forms[pending.action];
  for (let i = 1; i < pending.sources.length; i++) document.getElementById('addPlaylist').click();
  const rows = form.querySelectorAll('.playlist');
  pending.sources.forEach((source, i) => {
    rows[i].querySelector('[name=playlist]').value = source.playlist_id;
    rows[i].querySelector('[name=owner]').value = source.owner_id;
  });
  form.querySelector('[name=public]').checked = pending.public;
}

let next = null;
async function predict(offset) {
  const body = new URLSearchParams({
    name: document.getElementById('predict-name').value,
    author: document.getElementById('predict-author').value,
    offset: String(offset),
  });
  const res = await fetch('/predict', { method: 'POST', body });
  const data = await res.json();
  const list = document.getElementById('predictions');
  if (offset === 0) list.innerHTML = '';
  if (data.error) { list.textContent = data.error; return; }
  for (const m of data.matches) {
    const li = document.createElement('li');
    li.textContent = `${m.name} by ${m.owner_display_name}`;
    li.addEventListener('click', () => {
      const form = forms.fork.style.display === 'none' ? forms.merge : forms.fork;
      const rows = form.querySelectorAll('.playlist');
      const row = rows[rows.length - 1];
      row.querySelector('[name=playlist]').value = m.playlist_id;
      row.querySelector('[name=owner]').value = m.owner_id;
    });
    list.appendChild(li);
  }
  next = data.next;
  document.getElementById('more').style.display = next === null ? 'none' : 'inline';
}
let timer = null;
for (const id of ['predict-name', 'predict-author']) {
  document.getElementById(id).addEventListener('input', () => {
    clearTimeout(timer);
    timer = setTimeout(() => predict(0), 300);
  });
}
document.getElementById('more').addEventListener('click', () => { if (next !== null) predict(next); });
</script>
"#;

/// The fork/merge form, pre-filled with `pending` when a submission was
/// interrupted by the sign-in.
pub fn index_page(pending: Option<&ActionRequest>) -> String {
    let prefill = pending.and_then(prefill_script).unwrap_or_default();
    [HEAD, INDEX_BODY, prefill.as_str(), FOOT].concat()
}

fn prefill_script(request: &ActionRequest) -> Option<String> {
    let pending = json!({
        "action": request.action_name(),
        "public": request.public(),
        "sources": request.sources(),
    });
    // keep user input from closing the script element
    let pending = serde_json::to_string(&pending).ok()?.replace('<', "\\u003c");
    Some(format!("<script>prefill({pending});</script>\n"))
}

pub fn success_page(action: &str, name: Option<&str>) -> String {
    let done = match action {
        "fork" => "Your playlist was forked.",
        "merge" => "Your playlists were merged.",
        _ => "Done.",
    };
    let created = name
        .map(|n| format!("<p>Created <strong>{}</strong>.</p>\n", escape_html(n)))
        .unwrap_or_default();

    format!("{HEAD}<h2>{done}</h2>\n{created}<p><a href=\"/\">Back</a></p>\n{FOOT}")
}

pub fn error_page(message: &str) -> String {
    format!(
        "{HEAD}<h2>Something went wrong</h2>\n<p>{}</p>\n<p><a href=\"/\">Back</a></p>\n{FOOT}",
        escape_html(message)
    )
}
