//! Âge relatif du dernier commit d'une branche.

use chrono::{DateTime, Duration, Utc};

/// Unités utilisées, de la plus grande à la plus petite : (jours, singulier, pluriel).
const DAY_UNITS: &[(i64, &str, &str)] = &[
    (365, "1 an", "ans"),
    (30, "1 mois", "mois"),
    (7, "1 semaine", "semaines"),
];

/// Formate un timestamp unix en âge relatif ("il y a 2 heures", "hier"...).
///
/// Un timestamp nul (branche sans commit lisible) donne une chaîne vide.
pub fn format_relative_time(timestamp: i64) -> String {
    if timestamp == 0 {
        return String::new();
    }
    let Some(datetime) = DateTime::<Utc>::from_timestamp(timestamp, 0) else {
        return String::new();
    };
    format_age(Utc::now().signed_duration_since(datetime))
}

/// Formate une durée écoulée en texte relatif.
pub fn format_age(age: Duration) -> String {
    let minutes = age.num_minutes();
    let hours = age.num_hours();
    let days = age.num_days();

    if minutes < 1 {
        return "à l'instant".to_string();
    }
    if hours < 1 {
        return plural(minutes, "1 minute", "minutes");
    }
    if days < 1 {
        return plural(hours, "1 heure", "heures");
    }
    if days == 1 {
        return "hier".to_string();
    }

    for &(unit, one, many) in DAY_UNITS {
        if days >= unit {
            return plural(days / unit, one, many);
        }
    }
    format!("il y a {} jours", days)
}

fn plural(count: i64, one: &str, many: &str) -> String {
    if count == 1 {
        format!("il y a {}", one)
    } else {
        format!("il y a {} {}", count, many)
    }
}
