//! Fixture builders shared by the memory-source tests.

use crate::memory_source::InMemorySource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    pub balance: i64,
}

pub fn account(name: &str, balance: i64) -> Account {
    Account {
        name: name.to_string(),
        balance,
    }
}

/// Five accounts in a fixed, deliberately unsorted order.
pub fn test_accounts() -> Vec<Account> {
    vec![
        account("carol", 900),
        account("alice", 300),
        account("erin", 425),
        account("bob", 150),
        account("dave", 50),
    ]
}

pub fn account_source() -> InMemorySource<Account> {
    InMemorySource::new(test_accounts())
        .with_sort_key("name", |a: &Account, b: &Account| a.name.cmp(&b.name))
        .with_sort_key("balance", |a: &Account, b: &Account| {
            a.balance.cmp(&b.balance)
        })
}
