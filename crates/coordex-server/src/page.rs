//! Browser test page served on `GET /`.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>coordex</title>
<style>
  body { font-family: sans-serif; max-width: 60rem; margin: 2rem auto; padding: 0 1rem; }
  textarea { width: 100%; height: 12rem; font-family: monospace; }
  pre { background: #f4f4f4; padding: 1rem; overflow-x: auto; }
  button { margin: 0.5rem 0; padding: 0.4rem 1.2rem; }
</style>
</head>
<body>
<h1>Coordinate extraction</h1>
<p>Paste text containing coordinates and press <em>Extract</em>. The text is sent as the body of <code>POST /extract</code>.</p>
<textarea id="text">Point Alpha: 51°12'32.2"N 32°34'23.1"E and point Beta: 51°13'00.0"N 32°35'00.0"E</textarea>
<br>
<button id="extract">Extract</button>
<pre id="result"></pre>
<script>
document.getElementById('extract').addEventListener('click', async () => {
  const out = document.getElementById('result');
  out.textContent = '...';
  try {
    const response = await fetch('/extract', {
      method: 'POST',
      headers: { 'Content-Type': 'text/plain; charset=utf-8' },
      body: document.getElementById('text').value,
    });
    const json = await response.json();
    out.textContent = JSON.stringify(json, null, 2);
  } catch (err) {
    out.textContent = 'Request failed: ' + err;
  }
});
</script>
</body>
</html>
"#;
