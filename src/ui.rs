use crate::form::{format_time, RenderStyle};
use crate::models::AlarmRecord;

/// Renders the alarm page with the current setting already filled in.
pub fn render_index(alarm: &AlarmRecord) -> String {
    let checked = if alarm.enabled { "checked" } else { "" };
    INDEX_HTML
        .replace(
            "{{TIME}}",
            &format_time(alarm.hour, alarm.minute, RenderStyle::ZeroPadded),
        )
        .replace("{{CHECKED}}", checked)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Alarm</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(420px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Georgia", serif;
      font-size: 2.2rem;
      margin: 0;
    }

    input[type=time] {
      font-size: 2.4rem;
      padding: 8px 12px;
      border-radius: 16px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      color: var(--accent-2);
    }

    label {
      display: flex;
      align-items: center;
      gap: 10px;
      font-size: 1.1rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    button:active {
      transform: scale(0.98);
    }

    .status {
      min-height: 1.4em;
      color: var(--accent-2);
      font-weight: 600;
      opacity: 0;
      transition: opacity 400ms ease;
    }

    .status.visible {
      opacity: 1;
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>Alarm</h1>
    <input type="time" id="time" value="{{TIME}}" />
    <label><input type="checkbox" id="enabled" {{CHECKED}} /> Enabled</label>
    <button type="button" id="save">Save</button>
    <div class="status" id="status">Saved</div>
  </main>

  <script>
    const timeEl = document.getElementById('time');
    const enabledEl = document.getElementById('enabled');
    const statusEl = document.getElementById('status');

    const zeroPad = (n) => {
      const s = String(n);
      return s.length === 1 ? '0' + s : s;
    };

    const render = (alarm) => {
      timeEl.value = zeroPad(alarm.hour) + ':' + zeroPad(alarm.minute);
      enabledEl.checked = alarm.enabled;
    };

    const parse = () => {
      const parts = timeEl.value.split(':');
      if (parts.length !== 2 || !parts.every((p) => /^\s*\d+\s*$/.test(p))) {
        throw new Error('invalid time format: ' + timeEl.value);
      }
      return {
        hour: Number(parts[0]),
        minute: Number(parts[1]),
        enabled: enabledEl.checked
      };
    };

    const load = async () => {
      const res = await fetch('/alarm');
      if (!res.ok) {
        throw new Error('Unable to load alarm');
      }
      render(await res.json());
    };

    const save = async () => {
      statusEl.classList.remove('visible');
      const res = await fetch('/alarm', {
        method: 'PUT',
        headers: {
          'content-type': 'application/json; charset=utf-8',
          'accept': 'application/json'
        },
        body: JSON.stringify(parse())
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      render(await res.json());
      statusEl.classList.add('visible');
    };

    document.getElementById('save').addEventListener('click', () => {
      save().catch((err) => console.error(err));
    });

    load().catch((err) => console.error(err));
  </script>
</body>
</html>
"#;
