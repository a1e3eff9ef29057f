use crate::config::config;
use crate::types::mail::SendEmail;
use reqwest::{Client, ClientBuilder};
use std::time::{Duration, Instant};

/// POST an email to the configured HTTP mail provider (Resend-style API).
pub async fn send_email(email: SendEmail) -> Result<String, String> {
    let mail = &config().mail;

    let payload =
        serde_json::to_string(&email).map_err(|e| format!("serialize email failed: {e}"))?;

    let client: Client = ClientBuilder::new()
        .user_agent("modubook/1.0 (+reqwest)")
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| format!("build client failed: {e}"))?;

    log::debug!("[mail] -> POST {} ({} bytes)", mail.endpoint, payload.len());

    let t0 = Instant::now();
    let res = client
        .post(&mail.endpoint)
        .bearer_auth(&mail.api_key)
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|e| format!("send failed: {e}"))?;
    let dt = t0.elapsed();

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| format!("read body failed: {e}"))?;

    log::debug!("[mail] <- status {} in {} ms", status, dt.as_millis());

    if status.is_success() {
        Ok(body)
    } else {
        Err(format!("mail provider error: HTTP {status}: {body}"))
    }
}

/// Build the signup verification email. The link is valid for 24 hours.
pub fn verification_email(to: &str, nickname: &str, token: &str) -> SendEmail {
    let link = format!(
        "{}/api/auth/verify-email?token={}",
        config().frontend_url,
        token
    );

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2>Welcome to modubook, {nickname}!</h2>
  <p>Click the button below to verify your email address.</p>
  <div style="margin: 30px 0; text-align: center;">
    <a href="{link}"
       style="background-color: #4CAF50; color: white; padding: 14px 28px;
              text-decoration: none; border-radius: 4px; display: inline-block;">
      Verify email
    </a>
  </div>
  <p style="color: #999; font-size: 12px; word-break: break-all;">{link}</p>
  <hr style="border: none; border-top: 1px solid #eee;" />
  <p style="color: #999; font-size: 12px;">This link is valid for 24 hours.</p>
  <p style="color: #999; font-size: 12px;">If you did not sign up, ignore this email.</p>
</div>"#
    );

    let text = format!(
        "Welcome to modubook, {nickname}!\n\n\
         Open the link below to verify your email address:\n{link}\n\n\
         This link is valid for 24 hours.\n\
         If you did not sign up, ignore this email.\n"
    );

    SendEmail {
        from: config().mail.from.clone(),
        to: vec![to.to_string()],
        subject: "Verify your modubook account".to_string(),
        html: Some(html),
        text: Some(text),
        ..SendEmail::default()
    }
}
