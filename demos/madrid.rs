use pinmap::helpers::{create_map, create_marker, save_and_open};

/// Pins a few Madrid landmarks and opens the result in the browser
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut map = create_map(40.4168, -3.7038, None);
    map.options_mut().title = "Madrid".to_string();
    map.options_mut().control_scale = true;

    let landmarks = [
        (40.4168, -3.7038, "Puerta del Sol", "red"),
        (40.4138, -3.6921, "Museo del Prado", "blue"),
        (40.4153, -3.6845, "Parque del Retiro", "green"),
        (40.4180, -3.7143, "Palacio Real", "purple"),
    ];

    for (lat, lng, label, color) in landmarks {
        let id = map.add_marker(create_marker(lat, lng, label, Some(color)))?;
        println!("📍 {} ({}) at {:.4}, {:.4}", label, id, lat, lng);
    }

    map.fit_layers();
    save_and_open(&map, "madrid.html")?;
    println!("✅ Wrote madrid.html");

    Ok(())
}
