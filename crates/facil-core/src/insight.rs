//! Projection of the ledger handed to an external language-model advisor.
//!
//! The advisor itself lives outside this crate behind [`InsightProvider`].
//! Nothing in the ledger depends on it being present or correct.

use facil_domain::{Transaction, TransactionType};
use serde::Serialize;
use tracing::warn;

use crate::CoreError;

/// How many of the most recently recorded transactions are sent by default.
pub const DEFAULT_INSIGHT_WINDOW: usize = 50;

pub const MISSING_PROVIDER_MESSAGE: &str =
    "Erro: assistente não configurado. Verifique a chave de API nas configurações.";
pub const PROVIDER_ERROR_MESSAGE: &str =
    "Desculpe, não foi possível falar com o assistente agora. Tente novamente mais tarde.";
pub const EMPTY_RESPONSE_MESSAGE: &str = "Não foi possível gerar uma análise no momento.";

const SYSTEM_INSTRUCTION: &str = "\
Você é o FinChat, um consultor financeiro pessoal simpático e objetivo.
Analise as transações do usuário e responda em Português do Brasil, com valores em Real (R$).
Use Markdown e frases curtas, sem jargões.
Cubra: 1. um resumo do saldo; 2. as categorias com mais gastos; 3. uma dica prática de economia baseada nos dados.";

/// Compact, field-renamed view of a transaction to keep the prompt small.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InsightRecord {
    /// Calendar date, `YYYY-MM-DD`.
    pub d: String,
    /// Amount.
    pub v: f64,
    /// Raw category id.
    pub c: String,
    /// Direction.
    pub t: TransactionType,
}

impl From<&Transaction> for InsightRecord {
    fn from(txn: &Transaction) -> Self {
        Self {
            d: txn.date.date_naive().format("%Y-%m-%d").to_string(),
            v: txn.amount,
            c: txn.category.clone(),
            t: txn.kind,
        }
    }
}

/// Projects the last `limit` transactions in insertion order.
pub fn project_for_insight(transactions: &[Transaction], limit: usize) -> Vec<InsightRecord> {
    let start = transactions.len().saturating_sub(limit);
    transactions[start..].iter().map(InsightRecord::from).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsightRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub records: Vec<InsightRecord>,
}

impl InsightRequest {
    pub fn from_transactions(
        transactions: &[Transaction],
        limit: usize,
    ) -> Result<Self, CoreError> {
        let records = project_for_insight(transactions, limit);
        let payload = serde_json::to_string(&records)?;
        Ok(Self {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            prompt: format!(
                "Analise minhas últimas transações financeiras e me dê um resumo com dicas:\n\n{payload}"
            ),
            records,
        })
    }
}

/// External advisor that turns a request into free-text advice.
pub trait InsightProvider: Send + Sync {
    fn generate(&self, request: &InsightRequest) -> Result<String, CoreError>;
}

pub struct InsightService;

impl InsightService {
    /// Asks `provider` for advice. Always returns displayable text.
    pub fn advise(
        provider: Option<&dyn InsightProvider>,
        transactions: &[Transaction],
        limit: usize,
    ) -> String {
        let Some(provider) = provider else {
            return MISSING_PROVIDER_MESSAGE.to_string();
        };
        let result = InsightRequest::from_transactions(transactions, limit)
            .and_then(|request| provider.generate(&request));
        match result {
            Ok(text) if text.trim().is_empty() => EMPTY_RESPONSE_MESSAGE.to_string(),
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "insight provider failed");
                PROVIDER_ERROR_MESSAGE.to_string()
            }
        }
    }
}
