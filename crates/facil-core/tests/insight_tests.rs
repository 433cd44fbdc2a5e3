use std::sync::Mutex;

use chrono::{Duration, TimeZone, Utc};
use facil_core::{
    insight::{
        project_for_insight, DEFAULT_INSIGHT_WINDOW, EMPTY_RESPONSE_MESSAGE,
        MISSING_PROVIDER_MESSAGE, PROVIDER_ERROR_MESSAGE,
    },
    CoreError, InsightProvider, InsightRequest, InsightService,
};
use facil_domain::{NewTransaction, Transaction, TransactionType};

fn numbered(count: usize) -> Vec<Transaction> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 15, 45, 0).unwrap();
    (0..count)
        .map(|idx| {
            Transaction::new(NewTransaction::new(
                (idx + 1) as f64,
                format!("item {idx}"),
                TransactionType::Expense,
                "food",
                start + Duration::days(idx as i64),
            ))
        })
        .collect()
}

struct Recording {
    reply: Result<String, String>,
    seen: Mutex<Vec<InsightRequest>>,
}

impl Recording {
    fn replying(reply: Result<&str, &str>) -> Self {
        Self {
            reply: reply.map(str::to_string).map_err(str::to_string),
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl InsightProvider for Recording {
    fn generate(&self, request: &InsightRequest) -> Result<String, CoreError> {
        self.seen.lock().unwrap().push(request.clone());
        self.reply.clone().map_err(CoreError::Insight)
    }
}

#[test]
fn projection_keeps_last_records_in_insertion_order() {
    let ledger = numbered(60);
    let records = project_for_insight(&ledger, DEFAULT_INSIGHT_WINDOW);

    assert_eq!(records.len(), 50);
    assert_eq!(records[0].v, 11.0);
    assert_eq!(records[49].v, 60.0);
    assert_eq!(records[0].d, "2024-01-11");
    assert_eq!(records[0].c, "food");
}

#[test]
fn request_embeds_renamed_fields_only() {
    let ledger = numbered(1);
    let request = InsightRequest::from_transactions(&ledger, 50).unwrap();

    assert!(request
        .prompt
        .ends_with(r#"[{"d":"2024-01-01","v":1.0,"c":"food","t":"expense"}]"#));
    assert!(!request.prompt.contains("item 0"), "descriptions stay local");
    assert!(!request.system_instruction.is_empty());
}

#[test]
fn advise_without_provider_explains_configuration() {
    let text = InsightService::advise(None, &numbered(3), 50);
    assert_eq!(text, MISSING_PROVIDER_MESSAGE);
}

#[test]
fn advise_returns_provider_text() {
    let provider = Recording::replying(Ok("**Saldo positivo!**"));
    let text = InsightService::advise(Some(&provider), &numbered(3), 50);

    assert_eq!(text, "**Saldo positivo!**");
    let seen = provider.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].records.len(), 3);
}

#[test]
fn advise_fails_soft_on_provider_error_or_blank_reply() {
    let failing = Recording::replying(Err("timeout"));
    assert_eq!(
        InsightService::advise(Some(&failing), &numbered(2), 50),
        PROVIDER_ERROR_MESSAGE
    );

    let blank = Recording::replying(Ok("  \n"));
    assert_eq!(
        InsightService::advise(Some(&blank), &numbered(2), 50),
        EMPTY_RESPONSE_MESSAGE
    );
}
