//! View rendering
//!
//! Handlers never build HTML themselves. They hand a template name and a
//! JSON context to a `Renderer`:
//!
//! - `transactions.html`: `{"transactions": [{"id", "date", "amount"}, ...]}`
//! - `form.html`: `{}`
//! - `edit.html`: `{"transaction": {"id", "date", "amount"}}`

use crate::ApiError;
use serde::de::DeserializeOwned;
use txweb_config::AppConfig;
use txweb_core::Transaction;
use txweb_utils::{escape_html, format_amount};

pub const TEMPLATE_LIST: &str = "transactions.html";
pub const TEMPLATE_CREATE: &str = "form.html";
pub const TEMPLATE_EDIT: &str = "edit.html";

/// Turns a named template and a context into an HTML document
pub trait Renderer: Send + Sync {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, ApiError>;
}

/// Built-in renderer producing Tailwind-styled pages
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    app: AppConfig,
}

impl HtmlRenderer {
    pub fn new(app: AppConfig) -> Self {
        Self { app }
    }

    fn page(&self, heading: &str, inner_content: &str) -> String {
        let title = format!("{} - {}", heading, self.app.title);
        let content = format!(
            r#"<div class='max-w-3xl mx-auto py-8 px-4'>
    <header class='mb-6'>
        <a href='/' class='text-2xl font-bold text-indigo-600'>{}</a>
        <p class='text-sm text-gray-500'>{}</p>
    </header>
    <main class='bg-white rounded-xl shadow-sm p-6'>{}</main>
    <footer class='mt-6 text-xs text-gray-400 text-center'>{}</footer>
</div>"#,
            escape_html(&self.app.title),
            escape_html(&self.app.description),
            inner_content,
            self.footer()
        );
        crate::base_html(&title, &content)
    }

    fn footer(&self) -> String {
        let mut footer = format!("v{}", escape_html(&self.app.version));
        if let Some(contact) = &self.app.contact {
            let name = escape_html(&contact.name);
            match (&contact.url, &contact.email) {
                (Some(url), _) => footer.push_str(&format!(
                    " &middot; <a href='{}' class='hover:underline'>{}</a>",
                    escape_html(url), name
                )),
                (None, Some(email)) => footer.push_str(&format!(
                    " &middot; <a href='mailto:{}' class='hover:underline'>{}</a>",
                    escape_html(email), name
                )),
                (None, None) => footer.push_str(&format!(" &middot; {}", name)),
            }
        }
        footer
    }

    fn list_page(&self, transactions: &[Transaction]) -> String {
        let rows: String = if transactions.is_empty() {
            "<tr><td colspan='4' class='py-6 text-center text-gray-500'>No transactions yet</td></tr>".to_string()
        } else {
            transactions.iter().map(|t| {
                let amount_class = if t.is_debit() { "text-red-600" } else { "text-green-600" };
                format!(
                    r#"<tr class='border-b'>
    <td class='py-2 px-3 text-gray-500'>{id}</td>
    <td class='py-2 px-3'>{date}</td>
    <td class='py-2 px-3 text-right font-medium {class}'>{amount}</td>
    <td class='py-2 px-3 text-right whitespace-nowrap'>
        <a href='/edit/{id}' class='text-indigo-600 hover:underline mr-3'>Edit</a>
        <form method='post' action='/delete/{id}' class='inline' onsubmit="return confirm('Delete transaction {id}?')">
            <button type='submit' class='text-red-600 hover:underline'>Delete</button>
        </form>
    </td>
</tr>"#,
                    id = t.id,
                    date = escape_html(&t.date),
                    class = amount_class,
                    amount = format_amount(t.amount)
                )
            }).collect()
        };

        let inner_content = format!(
            r#"<div class='flex items-center justify-between mb-4'>
    <h2 class='text-xl font-bold'>Transactions</h2>
    <a href='/add' class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>Add transaction</a>
</div>
<table class='w-full text-sm'>
    <thead>
        <tr class='border-b text-left text-gray-500'>
            <th class='py-2 px-3'>ID</th>
            <th class='py-2 px-3'>Date</th>
            <th class='py-2 px-3 text-right'>Amount</th>
            <th class='py-2 px-3'></th>
        </tr>
    </thead>
    <tbody>{}</tbody>
</table>"#,
            rows
        );
        self.page("Transactions", &inner_content)
    }

    fn form_page(&self, heading: &str, action: &str, date: &str, amount: &str, submit: &str) -> String {
        let inner_content = format!(
            r#"<h2 class='text-xl font-bold mb-4'>{heading}</h2>
<form method='post' action='{action}' class='space-y-4'>
    <div>
        <label for='date' class='block text-sm font-medium text-gray-700 mb-1'>Date</label>
        <input type='text' id='date' name='date' value='{date}' placeholder='YYYY-MM-DD' required class='w-full px-3 py-2 border rounded-lg'>
    </div>
    <div>
        <label for='amount' class='block text-sm font-medium text-gray-700 mb-1'>Amount</label>
        <input type='number' step='any' id='amount' name='amount' value='{amount}' required class='w-full px-3 py-2 border rounded-lg'>
    </div>
    <div class='flex gap-2'>
        <button type='submit' class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>{submit}</button>
        <a href='/' class='px-4 py-2 border rounded-lg hover:bg-gray-50'>Cancel</a>
    </div>
</form>"#,
            heading = heading,
            action = action,
            date = escape_html(date),
            amount = escape_html(amount),
            submit = submit
        );
        self.page(heading, &inner_content)
    }
}

fn context_field<T: DeserializeOwned>(
    template: &str,
    context: &serde_json::Value,
    key: &str,
) -> Result<T, ApiError> {
    let value = context.get(key).cloned().ok_or_else(|| ApiError::InternalError {
        message: format!("{} requires '{}' in its context", template, key),
    })?;
    serde_json::from_value(value).map_err(|e| ApiError::InternalError {
        message: format!("{}: invalid '{}' in context: {}", template, key, e),
    })
}

impl Renderer for HtmlRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, ApiError> {
        match template {
            TEMPLATE_LIST => {
                let transactions: Vec<Transaction> = context_field(template, context, "transactions")?;
                Ok(self.list_page(&transactions))
            }
            TEMPLATE_CREATE => Ok(self.form_page("New transaction", "/add", "", "", "Create")),
            TEMPLATE_EDIT => {
                let tx: Transaction = context_field(template, context, "transaction")?;
                let heading = format!("Edit transaction {}", tx.id);
                let action = format!("/edit/{}", tx.id);
                Ok(self.form_page(&heading, &action, &tx.date, &tx.amount.to_string(), "Save"))
            }
            _ => Err(ApiError::InternalError {
                message: format!("Unknown template: {}", template),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn renderer() -> HtmlRenderer {
        HtmlRenderer::new(AppConfig::default())
    }

    #[test]
    fn test_list_renders_rows_in_order() {
        let html = renderer()
            .render(TEMPLATE_LIST, &json!({ "transactions": txweb_core::sample_transactions() }))
            .unwrap();
        let first = html.find("2025-06-01").unwrap();
        let second = html.find("2025-06-02").unwrap();
        let third = html.find("2025-06-03").unwrap();
        assert!(first < second && second < third);
        assert!(html.contains("-200.00"));
        assert!(html.contains("action='/delete/2'"));
        assert!(html.contains("href='/edit/3'"));
    }

    #[test]
    fn test_list_empty() {
        let html = renderer().render(TEMPLATE_LIST, &json!({ "transactions": [] })).unwrap();
        assert!(html.contains("No transactions yet"));
    }

    #[test]
    fn test_create_form() {
        let html = renderer().render(TEMPLATE_CREATE, &json!({})).unwrap();
        assert!(html.contains("action='/add'"));
        assert!(html.contains("name='date'"));
        assert!(html.contains("name='amount' value=''"));
    }

    #[test]
    fn test_edit_form_prefilled() {
        let context = json!({ "transaction": { "id": 2, "date": "2025-06-02", "amount": -200.0 } });
        let html = renderer().render(TEMPLATE_EDIT, &context).unwrap();
        assert!(html.contains("action='/edit/2'"));
        assert!(html.contains("value='2025-06-02'"));
        assert!(html.contains("value='-200'"));
    }

    #[test]
    fn test_escapes_dates() {
        let context = json!({ "transactions": [{ "id": 1, "date": "<b>x</b>", "amount": 1.0 }] });
        let html = renderer().render(TEMPLATE_LIST, &context).unwrap();
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(!html.contains("<b>x</b>"));
    }

    #[test]
    fn test_missing_context_is_error() {
        let err = renderer().render(TEMPLATE_EDIT, &json!({})).unwrap_err();
        assert!(matches!(err, ApiError::InternalError { .. }));
    }

    #[test]
    fn test_unknown_template() {
        let err = renderer().render("report.html", &json!({})).unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_footer_contact() {
        let mut app = AppConfig::default();
        app.version = "1.0.0".to_string();
        app.contact = Some(txweb_config::ContactConfig {
            name: "Ops".to_string(),
            url: None,
            email: Some("ops@example.com".to_string()),
        });
        let html = HtmlRenderer::new(app).render(TEMPLATE_CREATE, &json!({})).unwrap();
        assert!(html.contains("v1.0.0"));
        assert!(html.contains("mailto:ops@example.com"));
    }
}
