//! Result-page rendering for the form endpoints.

use crate::store::User;

/// Escape the five HTML-significant characters.
///
/// Ampersand must be replaced first; reordering would double-escape the
/// entities produced for the other four characters.
pub fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Build the registration result document for a newly stored user.
///
/// User-submitted fields are escaped before being inlined.
pub fn render_result_page(user: &User) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>등록 완료</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            line-height: 1.6;
            max-width: 600px;
            margin: 0 auto;
            padding: 40px 20px;
            background: #f5f5f5;
            color: #333;
        }}
        .card {{
            background: white;
            border-radius: 10px;
            padding: 30px;
            box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
        }}
        h1 {{
            color: #667eea;
            border-bottom: 2px solid #667eea;
            padding-bottom: 10px;
        }}
        dt {{
            font-weight: bold;
            margin-top: 15px;
            color: #667eea;
        }}
        dd {{
            margin: 5px 0 0 0;
        }}
        a {{
            color: #667eea;
            text-decoration: none;
            font-weight: 600;
        }}
        a:hover {{
            text-decoration: underline;
        }}
    </style>
</head>
<body>
    <div class="card">
        <h1>사용자가 등록되었습니다.</h1>
        <dl>
            <dt>번호</dt>
            <dd>{id}</dd>
            <dt>이름</dt>
            <dd>{name}</dd>
            <dt>나이</dt>
            <dd>{age}</dd>
            <dt>등록 시각</dt>
            <dd>{created_at}</dd>
        </dl>
        <p><a href="/">← 처음으로</a></p>
    </div>
</body>
</html>"#,
        id = user.id,
        name = escape(&user.name),
        age = user.age,
        created_at = escape(&user.created_at),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            id: 1,
            name: name.to_string(),
            age: 30,
            created_at: "2026-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_escape_covers_all_five_characters() {
        assert_eq!(
            escape(r#"<script>&"'</script>"#),
            "&lt;script&gt;&amp;&quot;&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_ampersand_first() {
        // A pre-existing entity must come out double-escaped, not preserved.
        assert_eq!(escape("&lt;"), "&amp;lt;");
        assert_eq!(escape("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_leaves_plain_text_alone() {
        assert_eq!(escape("Kim"), "Kim");
        assert_eq!(escape("김철수"), "김철수");
    }

    #[test]
    fn test_render_escapes_name() {
        let page = render_result_page(&user(r#"<script>&"'</script>"#));
        assert!(page.contains("&lt;script&gt;&amp;&quot;&#39;&lt;/script&gt;"));
        assert!(!page.contains(r#"<script>&"'</script>"#));
    }

    #[test]
    fn test_render_includes_record_fields() {
        let page = render_result_page(&user("Kim"));
        assert!(page.contains("<dd>1</dd>"));
        assert!(page.contains("<dd>Kim</dd>"));
        assert!(page.contains("<dd>30</dd>"));
        assert!(page.contains("2026-01-01T00:00:00+00:00"));
    }
}
