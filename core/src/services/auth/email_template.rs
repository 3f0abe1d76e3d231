//! Verification mail content

use crate::services::verification::OutgoingMail;

/// Subject and bodies of a verification mail
#[derive(Clone, PartialEq, Eq)]
pub struct VerificationEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl VerificationEmail {
    /// Compose the mail for `code`, valid for `ttl_minutes`
    pub fn compose(product_name: &str, code: &str, ttl_minutes: i64) -> Self {
        let minutes = if ttl_minutes == 1 { "minute" } else { "minutes" };

        let subject = format!("{} is your {} verification code", code, product_name);

        let text = format!(
            "Your {product} verification code is {code}.\n\n\
             The code expires in {ttl} {minutes}. If you did not request it, you can ignore this email.\n",
            product = product_name,
            code = code,
            ttl = ttl_minutes,
            minutes = minutes,
        );

        let html = format!(
            "<!DOCTYPE html>\
             <html><body style=\"font-family:sans-serif\">\
             <p>Your {product} verification code is:</p>\
             <p style=\"font-size:28px;font-weight:bold;letter-spacing:6px\">{code}</p>\
             <p>The code expires in {ttl} {minutes}. If you did not request it, you can ignore this email.</p>\
             </body></html>",
            product = escape_html(product_name),
            code = code,
            ttl = ttl_minutes,
            minutes = minutes,
        );

        Self { subject, text, html }
    }

    /// Address the composed content to `to`
    pub fn into_mail(self, to: impl Into<String>) -> OutgoingMail {
        OutgoingMail {
            to: to.into(),
            subject: self.subject,
            text: self.text,
            html: self.html,
        }
    }
}

impl std::fmt::Debug for VerificationEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("VerificationEmail { .. }")
    }
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
