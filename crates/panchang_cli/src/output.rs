//! Plain-text rendering.

use panchang_rs::{
    DayElementListing, DayPanchang, Instant, LunarCycle, MoonRiseSet, PanchangInfo,
    PanchangaElement, SkyPosition, SolarDayWindow,
};

fn hm(i: &Instant) -> String {
    i.datetime().format("%Y-%m-%d %H:%M").to_string()
}

fn element_line(label: &str, e: &PanchangaElement) -> String {
    format!(
        "{label:<10} {:>2} {:<18} {} -> {}  ({:.1}%)",
        e.index,
        e.name,
        hm(&e.start),
        hm(&e.end),
        e.percent_complete
    )
}

fn window_lines(w: &SolarDayWindow) -> Vec<String> {
    match w {
        SolarDayWindow::Regular {
            sunrise,
            solar_noon,
            sunset,
        } => vec![
            format!("Sunrise    {}", hm(sunrise)),
            format!("Solar noon {}", hm(solar_noon)),
            format!("Sunset     {}", hm(sunset)),
        ],
        SolarDayWindow::PolarDay { solar_noon } => {
            vec![format!("Polar day, solar noon {}", hm(solar_noon))]
        }
        SolarDayWindow::PolarNight { solar_noon } => {
            vec![format!("Polar night, solar noon {}", hm(solar_noon))]
        }
    }
}

fn moon_lines(m: &MoonRiseSet) -> Vec<String> {
    let event = |label: &str, at: &Option<Instant>| match at {
        Some(t) => format!("{label:<10} {}", hm(t)),
        None => format!("{label:<10} none on {}", m.date),
    };
    let mut lines = vec![event("Moonrise", &m.moonrise), event("Moonset", &m.moonset)];
    if !m.is_visible() {
        lines.push("           Moon below the horizon all day".to_string());
    }
    lines
}

fn cycle_line(c: &LunarCycle) -> String {
    format!(
        "           age {:.2} d since {}, next {} {}",
        c.age_days,
        hm(&c.previous_new_moon),
        c.next_phase.phase.name(),
        hm(&c.next_phase.at)
    )
}

pub fn panchang_text(info: &PanchangInfo) -> String {
    let mut lines = vec![
        format!(
            "{}  (ayanamsha {} {:.4}°)",
            info.instant,
            info.ayanamsha.name(),
            info.ayanamsha_deg
        ),
        element_line("Tithi", &info.tithi),
        format!(
            "           {} paksha, {} class, day {} of the {} month",
            info.tithi_details.paksha.name(),
            info.tithi_details.class.name(),
            info.tithi_details.month_day,
            info.tithi_details.calendar_system.name()
        ),
        element_line("Nakshatra", &info.nakshatra),
        format!(
            "           pada {}, lord {}, deity {}, symbol {}",
            info.nakshatra_details.pada,
            info.nakshatra_details.lord.name(),
            info.nakshatra_details.deity,
            info.nakshatra_details.symbol
        ),
        element_line("Yoga", &info.yoga),
        format!("           {}", info.yoga_quality.name()),
        element_line("Karana", &info.karana),
        format!(
            "           {}{}",
            info.karana_details.karana_type.name(),
            if info.karana_details.is_vishti {
                ", Vishti (Bhadra)"
            } else {
                ""
            }
        ),
        format!(
            "Vaar       {} ({})",
            info.vaar.vaar.name(),
            info.vaar.vaar.english_name()
        ),
        format!(
            "Hora       {:>2} {:<18} {} -> {}",
            info.hora.number,
            info.hora.hora.name(),
            hm(&info.hora.start),
            hm(&info.hora.end)
        ),
    ];
    lines.extend(window_lines(&info.solar_day_window));
    if let Some(m) = &info.muhurta {
        for (label, w) in [
            ("Rahu Kalam", &m.rahu_kalam),
            ("Yamagandam", &m.yamagandam),
            ("Gulika", &m.gulika_kalam),
            ("Abhijit", &m.abhijit),
        ] {
            lines.push(format!("{label:<10} {} -> {}", hm(&w.start), hm(&w.end)));
        }
    }
    lines.push(format!(
        "Moon       {} ({:.1}% lit)",
        info.lunar_phase.phase.name(),
        info.lunar_phase.illumination * 100.0
    ));
    lines.push(cycle_line(&info.lunar_cycle));
    lines.extend(moon_lines(&info.moon));
    lines.join("\n")
}

fn listing_line(label: &str, l: &DayElementListing) -> String {
    let mut line = element_line(label, &l.element);
    if l.repeated_from_previous {
        line.push_str("  [continues from previous day]");
    }
    if l.repeats_next_day {
        line.push_str("  [repeats next day]");
    }
    for s in &l.skipped {
        line.push_str(&format!("\n           skipped: {} {}", s.index, s.name));
    }
    line
}

pub fn day_text(day: &DayPanchang) -> String {
    let mut lines = vec![format!(
        "{}  {} ({}), day starts {}",
        day.date,
        day.vaar.name(),
        day.vaar.english_name(),
        hm(&day.anchor)
    )];
    lines.extend(window_lines(&day.solar_day_window));
    lines.push(listing_line("Tithi", &day.tithi));
    lines.push(listing_line("Nakshatra", &day.nakshatra));
    lines.push(listing_line("Yoga", &day.yoga));
    lines.push(listing_line("Karana", &day.karana));
    lines.extend(moon_lines(&day.moon));
    lines.join("\n")
}

pub fn moon_text(m: &MoonRiseSet, c: &LunarCycle) -> String {
    let mut lines = moon_lines(m);
    lines.push(cycle_line(c).trim_start().to_string());
    lines.join("\n")
}

pub fn window_text(w: &SolarDayWindow) -> String {
    window_lines(w).join("\n")
}

pub fn sky_text(sky: &[SkyPosition]) -> String {
    sky.iter()
        .map(|s| {
            let screen = match s.screen {
                panchang_rs::ScreenPosition::Visible { x, y } => format!("({x:+.3}, {y:+.3})"),
                panchang_rs::ScreenPosition::OffScreen => "off screen".to_string(),
            };
            format!(
                "{:<5} λ {:>8.3}°  RA {:>8.3}°  δ {:>+7.3}°  az {:>7.2}°  alt {:>+6.2}°  {screen}",
                s.body.name(),
                s.ecliptic.lon_deg,
                s.equatorial.ra_deg,
                s.equatorial.dec_deg,
                s.horizontal.azimuth_deg,
                s.horizontal.altitude_deg
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
