// SPDX-License-Identifier: MIT
// Copyright (c) 2026 aerodist contributors

//! Static flight restriction policy.
//!
//! Country names are matched against the dataset's Russian-language country
//! column, so the tables below hold the names exactly as they appear there.

use crate::airport::Airport;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Countries that accept no flights to or from domestic airports.
pub const RESTRICTED_COUNTRIES: &[&str] = &[
    // Europe
    "Германия",
    "Франция",
    "Италия",
    "Испания",
    "Великобритания",
    "Польша",
    "Чехия",
    "Словакия",
    "Венгрия",
    "Румыния",
    "Болгария",
    "Греция",
    "Кипр",
    "Хорватия",
    "Словения",
    "Австрия",
    "Швейцария",
    "Бельгия",
    "Нидерланды",
    "Люксембург",
    "Дания",
    "Швеция",
    "Норвегия",
    "Финляндия",
    "Исландия",
    "Ирландия",
    "Португалия",
    "Мальта",
    "Эстония",
    "Латвия",
    "Литва",
    // North America
    "США",
    "Канада",
    // Asia-Pacific
    "Япония",
    "Южная Корея",
    "Австралия",
    "Новая Зеландия",
    "Сингапур",
    "Малайзия",
    "Индонезия",
    "Филиппины",
    // Other
    "Украина",
    "Молдова",
];

/// Country values that mark an airport as domestic.
pub const DOMESTIC_COUNTRY_NAMES: &[&str] = &["Россия", "РФ", "Российская Федерация"];

/// Code prefix used only for airports loaded without a country column.
pub const DOMESTIC_CODE_PREFIX: char = 'U';

static RESTRICTED_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn restricted_set() -> &'static HashSet<&'static str> {
    RESTRICTED_SET.get_or_init(|| RESTRICTED_COUNTRIES.iter().copied().collect())
}

pub fn is_restricted_country(country: &str) -> bool {
    restricted_set().contains(country.trim())
}

/// Whether the airport counts as domestic.
///
/// The country value always wins when present, even when blank; the code
/// prefix is consulted only for airports loaded without a country column.
pub fn is_domestic(airport: &Airport) -> bool {
    match airport.country.as_deref() {
        Some(country) => DOMESTIC_COUNTRY_NAMES.contains(&country.trim()),
        None => airport.code.starts_with(DOMESTIC_CODE_PREFIX),
    }
}

fn has_restricted_country(airport: &Airport) -> bool {
    airport
        .country
        .as_deref()
        .is_some_and(is_restricted_country)
}

/// Eligibility rule between two airports.
///
/// Only a domestic/restricted pairing is refused. Two foreign airports are
/// always flyable, even when both countries are on the restricted list.
pub fn can_fly_between(a: &Airport, b: &Airport) -> bool {
    let a_domestic = is_domestic(a);
    let b_domestic = is_domestic(b);

    if a_domestic && b_domestic {
        return true;
    }
    if a_domestic && has_restricted_country(b) {
        return false;
    }
    if b_domestic && has_restricted_country(a) {
        return false;
    }
    true
}
