// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Donut and cube chart demos over a sample fleet.
//!
//! Writes `donut_charts_demo.html`. Set `RUST_LOG=debug` to follow the chart events.

mod html;
mod svg;

use std::error::Error;

use donut_charts::{CubeChart, PieChart, SortPolicy, point_on_circle};
use fleet_store::schema::{BRAND, MODEL, STATUS, VEHICLE_TYPE};
use fleet_store::{InventoryStore, MemoryStore, ModelData, VehicleRecord};
use kurbo::{Point, Rect};
use peniko::color::palette::css;

const FRAME_MS: f64 = 16.0;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let store = sample_fleet()?;
    log::info!(
        "fleet: {} vehicles, brands {:?}",
        store.vehicles().count(),
        store.brands()
    );

    let view = Rect::new(0.0, 0.0, 480.0, 480.0);
    let sections = vec![
        brands_demo(&store, view)?,
        hover_demo(&store, view)?,
        click_demo(&store, view)?,
        status_demo(&store, view)?,
        spin_demo(&store, view)?,
        cube_demo(&store)?,
    ];

    let html = html::render_report("Donut charts demo", &sections);
    std::fs::write("donut_charts_demo.html", html)?;
    println!("wrote donut_charts_demo.html");
    Ok(())
}

fn sample_fleet() -> Result<MemoryStore, Box<dyn Error>> {
    let mut store = MemoryStore::new();
    let catalog = [
        ("VW", &["Golf", "Caddy", "Crafter"][..]),
        ("Audi", &["A4", "A6"][..]),
        ("BMW", &["320d"][..]),
        ("Mercedes", &["Sprinter", "Vito"][..]),
        ("Skoda", &["Octavia"][..]),
    ];
    for (brand, models) in catalog {
        store.add_brand(brand);
        for model in models {
            store.add_model(brand, model);
            let van = matches!(*model, "Caddy" | "Crafter" | "Sprinter" | "Vito");
            store.add_model_data(ModelData {
                model: (*model).to_owned(),
                brand: brand.to_owned(),
                vehicle_type: if van { "van" } else { "car" }.to_owned(),
                gearbox: if van { "manual" } else { "automatic" }.to_owned(),
                fuel: if van { "diesel" } else { "petrol" }.to_owned(),
                seats: if van { 3 } else { 5 },
                power_kw: if van { 100 } else { 110 },
            });
        }
    }
    for status in ["available", "in service", "in repair", "retired"] {
        store.add_status(status);
    }
    for vehicle_type in ["car", "van"] {
        store.add_vehicle_type(vehicle_type);
    }

    // A skewed but deterministic fleet: every model, several times, in rotating states.
    let statuses = ["available", "available", "in service", "in repair", "retired"];
    let mut n = 0_usize;
    for (brand, models) in catalog {
        for (m, model) in models.iter().enumerate() {
            let copies = 2 + (brand.len() + m * 3) % 5;
            for _ in 0..copies {
                let base = store.base_data(model);
                let column = |index: usize| {
                    base.get(index)
                        .ok_or_else(|| format!("no base data for model {model:?}"))
                };
                let (gearbox, fuel, vehicle_type) = (column(4)?, column(5)?, column(3)?);
                let id = |table, value: &str| {
                    store
                        .lookup_id(table, "name", value)
                        .ok_or_else(|| format!("unknown {table} {value:?}"))
                };
                let record = VehicleRecord {
                    gearbox: gearbox.clone(),
                    fuel: fuel.clone(),
                    plate: format!("B-{} {}", &brand[..1], 100 + n),
                    brand_id: id(BRAND, brand)?,
                    model_id: id(MODEL, *model)?,
                    status_id: id(STATUS, statuses[n % statuses.len()])?,
                    type_id: id(VEHICLE_TYPE, vehicle_type.as_str())?,
                };
                store.insert_record(record)?;
                n += 1;
            }
        }
    }
    Ok(store)
}

fn brand_chart(store: &MemoryStore, view: Rect) -> Result<PieChart, Box<dyn Error>> {
    let counts = store.count_vehicles_by(BRAND);
    let mut chart = PieChart::new(view);
    chart.set_entries(
        counts.into_iter().map(|(name, n)| (name, n as f64)),
        SortPolicy::ByValueDesc,
    )?;
    chart.set_title("Vehicles per brand")?;
    Ok(chart)
}

/// Runs `chart` forward until its animations settle, logging what it reported.
fn settle(chart: &mut PieChart) {
    let mut frames = 0;
    while chart.is_animating() {
        chart.advance(FRAME_MS);
        frames += 1;
    }
    for event in chart.drain_events() {
        log::info!("{event:?}");
    }
    log::debug!("settled after {frames} frames, redraw requested: {}", chart.take_redraw());
}

fn snapshot(chart: &PieChart) -> String {
    let mut surface = svg::SvgSurface::new(chart.view());
    chart.paint(&mut surface);
    surface.to_svg_string()
}

/// A point halfway out on the slice named `name`.
fn slice_point(chart: &PieChart, name: &str) -> Option<Point> {
    let slice = chart.slices().iter().find(|s| s.label() == name)?;
    Some(point_on_circle(
        chart.view().center(),
        slice.mid_angle(chart.rotation()),
        chart.pie_size(),
        0.5,
    ))
}

fn largest(chart: &PieChart) -> String {
    chart
        .entries()
        .next()
        .map(|(name, _)| name.to_owned())
        .unwrap_or_default()
}

fn brands_demo(store: &MemoryStore, view: Rect) -> Result<html::HtmlSection, Box<dyn Error>> {
    let chart = brand_chart(store, view)?;
    let shares: Vec<String> = chart
        .percentages()
        .map(|(name, pct)| format!("{name} {pct:.1}%"))
        .collect();
    Ok(html::HtmlSection {
        title: "Vehicles per brand",
        description: format!("Sorted by value, descending: {}.", shares.join(", ")),
        svg: snapshot(&chart),
    })
}

fn hover_demo(store: &MemoryStore, view: Rect) -> Result<html::HtmlSection, Box<dyn Error>> {
    let mut chart = brand_chart(store, view)?;
    let name = largest(&chart);
    if let Some(point) = slice_point(&chart, &name) {
        chart.pointer_moved(point);
    }
    settle(&mut chart);
    Ok(html::HtmlSection {
        title: "Hover",
        description: format!("Pointer over {name}: the slice lightens and pops out by 40."),
        svg: snapshot(&chart),
    })
}

fn click_demo(store: &MemoryStore, view: Rect) -> Result<html::HtmlSection, Box<dyn Error>> {
    let mut chart = brand_chart(store, view)?;
    let name = chart
        .entries()
        .last()
        .map(|(name, _)| name.to_owned())
        .unwrap_or_default();
    if let Some(point) = slice_point(&chart, &name) {
        chart.pointer_moved(point);
        let state = chart.pointer_pressed(point);
        log::debug!("press -> {state:?}");
    }
    settle(&mut chart);
    Ok(html::HtmlSection {
        title: "Click",
        description: format!("Clicked {name}; the info overlay shows its share."),
        svg: snapshot(&chart),
    })
}

fn status_demo(store: &MemoryStore, view: Rect) -> Result<html::HtmlSection, Box<dyn Error>> {
    let mut chart = PieChart::new(view);
    chart.set_entries(
        store
            .count_vehicles_by(STATUS)
            .into_iter()
            .map(|(name, n)| (name, n as f64)),
        SortPolicy::ByNameLengthDesc,
    )?;
    chart.set_title("Fleet by status")?;
    chart.set_title_color(css::DARK_SLATE_BLUE);
    chart.set_slice_colors([css::SEA_GREEN, css::STEEL_BLUE, css::GOLDENROD, css::INDIAN_RED]);
    chart.set_rotation(-45.0);
    Ok(html::HtmlSection {
        title: "Status",
        description: format!(
            "Sorted by name length, custom colors, rotated to {} degrees.",
            chart.rotation()
        ),
        svg: snapshot(&chart),
    })
}

fn spin_demo(store: &MemoryStore, view: Rect) -> Result<html::HtmlSection, Box<dyn Error>> {
    let mut chart = brand_chart(store, view)?;
    chart.spin();
    let mut elapsed = 0.0;
    while elapsed < 2_000.0 {
        chart.advance(FRAME_MS);
        elapsed += FRAME_MS;
    }
    let rotation = chart.rotation();
    chart.drain_events();
    Ok(html::HtmlSection {
        title: "Spin",
        description: format!("Two seconds into a spin: rotation {rotation:.1} degrees."),
        svg: snapshot(&chart),
    })
}

fn cube_demo(store: &MemoryStore) -> Result<html::HtmlSection, Box<dyn Error>> {
    let total = store.vehicles().count();
    let available = store
        .count_vehicles_by(STATUS)
        .into_iter()
        .find_map(|(name, n)| (name == "available").then_some(n))
        .unwrap_or(0);
    let level = if total == 0 {
        0.0
    } else {
        available as f64 / total as f64
    };

    let mut cube = CubeChart::new(Rect::new(20.0, 20.0, 180.0, 420.0))
        .with_depth(30.0)
        .with_color(css::STEEL_BLUE);
    cube.set_level(level);
    while cube.is_animating() {
        cube.advance(FRAME_MS);
    }
    let mut surface = svg::SvgSurface::new(Rect::new(0.0, 0.0, 200.0, 440.0));
    cube.paint(&mut surface);
    Ok(html::HtmlSection {
        title: "Availability",
        description: format!("{available} of {total} vehicles available."),
        svg: surface.to_svg_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_fleet_registers_every_model() {
        let store = sample_fleet().expect("sample fleet builds");
        let counted: usize = store
            .count_vehicles_by(MODEL)
            .into_iter()
            .map(|(_, n)| n)
            .sum();
        assert_eq!(counted, store.vehicles().count());
        assert_eq!(store.count_vehicles_by(MODEL).len(), 9, "one entry per catalog model");
    }

    #[test]
    fn base_data_of_unknown_model_is_empty() {
        let store = sample_fleet().expect("sample fleet builds");
        assert!(store.base_data("Beetle").get(4).is_none());
    }
}
