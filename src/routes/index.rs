//! Upload form page

use axum::response::Html;

const INDEX_HTML: &str = r##"<!doctype html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Highlight Pro</title>
    <style>
        body { font-family: 'Segoe UI', sans-serif; background: #f0f2f5; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; }
        .card { background: white; padding: 40px; border-radius: 20px; box-shadow: 0 15px 35px rgba(0,0,0,0.1); text-align: center; width: 450px; }
        h1 { color: #1a73e8; margin-bottom: 8px; }
        p { color: #5f6368; margin-bottom: 30px; }
        .file-input-container { margin-bottom: 40px; }
        .file-label { display: block; border: 2px dashed #dadce0; padding: 30px; border-radius: 12px; cursor: pointer; transition: all 0.3s; color: #3c4043; font-weight: 500; }
        .file-label:hover { border-color: #1a73e8; background: #f8f9fa; }
        button { background: #1a73e8; color: white; border: none; padding: 15px; border-radius: 30px; font-size: 16px; font-weight: bold; cursor: pointer; width: 100%; transition: 0.3s; }
        button:hover { background: #1557b0; transform: translateY(-2px); box-shadow: 0 5px 15px rgba(26,115,232,0.4); }
    </style>
</head>
<body>
    <div class="card">
        <h1>📚 Highlight Pro</h1>
        <p>Transform messy PDF notes into elegant reports.</p>
        <form method="post" enctype="multipart/form-data" action="/upload">
            <div class="file-input-container">
                <input type="file" name="file" id="file" accept="application/pdf,.pdf" hidden required onchange="updateFileName()">
                <label for="file" class="file-label" id="file-display">Click to select PDF</label>
            </div>
            <button type="submit">Generate Report</button>
        </form>
    </div>
    <script>
        function updateFileName() {
            const file = document.getElementById('file').files[0];
            const display = document.getElementById('file-display');
            display.innerText = file ? file.name : "Click to select PDF";
            display.style.borderColor = "#1a73e8";
        }
    </script>
</body>
</html>
"##;

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
