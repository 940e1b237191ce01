use chrono::{Duration, NaiveDate};

use fao56_solar::{
    angles, day_of_year, daylight_hours, extraterrestrial_r, extraterrestrial_r_hour,
    solar_declination, SiteConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Bangkok, UTC+7 zone meridian.
    let site = SiteConfig::from_degrees(13.73, 360.0 - 105.0, 360.0 - 100.5)?;

    let start = NaiveDate::from_ymd_opt(2026, 1, 1).ok_or("bad start date")?;
    let index: Vec<NaiveDate> = (0..365).step_by(30).map(|d| start + Duration::days(d)).collect();

    let j = day_of_year(&index);
    let decl = solar_declination(&j);
    let hours = daylight_hours(&index, &site.latitude);
    let ra = extraterrestrial_r(&index, &site.latitude);

    println!("=== FAO-56 Solar Quantities ===");
    println!(
        "Site latitude: {:.2}° ({:.4} rad)",
        angles::rad_to_deg(site.latitude),
        site.latitude
    );
    println!();
    println!("{:<12} {:>4} {:>10} {:>9} {:>8}", "Date", "J", "Decl (°)", "N (h)", "Ra");
    for i in 0..index.len() {
        println!(
            "{:<12} {:>4} {:>10.2} {:>9.1} {:>8.2}",
            index[i].to_string(),
            j[i],
            angles::rad_to_deg(decl[i]),
            hours[i],
            ra[i]
        );
    }

    let day = NaiveDate::from_ymd_opt(2026, 6, 21).ok_or("bad solstice date")?;
    let midnight = day.and_hms_opt(0, 0, 0).ok_or("bad time")?;
    let hourly: Vec<_> = (0..24).map(|h| midnight + Duration::hours(h)).collect();
    let ra_hour = extraterrestrial_r_hour(&hourly, &site.latitude, site.lz, site.lm);
    let total: f64 = ra_hour.iter().sum();

    println!();
    println!("--- Hourly Ra on {} ---", day);
    println!("Per hour: {:.3} MJ/m²", ra_hour[12]);
    println!("Sum over 24 h: {:.2} MJ/m²", total);
    println!("Daily Ra: {:.2} MJ/m²", site.extraterrestrial_r(&[day])[0]);

    Ok(())
}
