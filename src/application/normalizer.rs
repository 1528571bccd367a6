// Normalizer - Raw rows into a snapshot
use crate::domain::sheet::{RawRow, column};
use crate::domain::snapshot::{
    ACTION_CATEGORIES, FrequencyTable, LIGHT_CATEGORIES, NONE_LABEL, Reading, SOIL_CATEGORIES,
    Snapshot,
};

/// Build a snapshot from a row window. Never fails: bad cells become absent.
pub fn normalize(rows: &[RawRow]) -> Snapshot {
    let mut snapshot = Snapshot {
        readings: Vec::with_capacity(rows.len()),
        labels: Vec::with_capacity(rows.len()),
        temperatures: Vec::with_capacity(rows.len()),
        humidities: Vec::with_capacity(rows.len()),
        soil_series: Vec::with_capacity(rows.len()),
        light: FrequencyTable::seeded(&LIGHT_CATEGORIES),
        soil: FrequencyTable::seeded(&SOIL_CATEGORIES),
        actions: FrequencyTable::seeded(&ACTION_CATEGORIES),
        diseases: FrequencyTable::new(),
        latest_prompt: None,
        latest_response: None,
    };

    for row in rows {
        let reading = read_row(row);

        if let Some(prompt) = &reading.prompt {
            snapshot.latest_prompt = Some(prompt.clone());
        }
        if let Some(response) = &reading.response {
            snapshot.latest_response = Some(response.clone());
        }

        snapshot.labels.push(reading.time.clone());
        snapshot.temperatures.push(reading.temperature);
        snapshot.humidities.push(reading.humidity);
        snapshot.soil_series.push(u8::from(reading.is_soil_wet()));

        if let Some(light) = &reading.light {
            snapshot.light.increment(light);
        }
        if let Some(soil) = &reading.soil {
            snapshot.soil.increment(soil);
        }
        snapshot.actions.increment(&reading.action);
        if let Some(disease) = &reading.disease {
            snapshot.diseases.increment(disease);
        }

        snapshot.readings.push(reading);
    }

    snapshot
}

fn read_row(row: &RawRow) -> Reading {
    let text = |idx: usize| row.text(idx).map(str::to_string);

    Reading {
        time: text(column::TIME).unwrap_or_default(),
        temperature: row.number(column::TEMPERATURE),
        humidity: row.number(column::HUMIDITY),
        light: text(column::LIGHT),
        soil: text(column::SOIL),
        image_url: text(column::IMAGE_URL),
        disease: text(column::DISEASE),
        action: text(column::ACTION).unwrap_or_else(|| NONE_LABEL.to_string()),
        plant: text(column::PLANT).unwrap_or_else(|| NONE_LABEL.to_string()),
        prompt: text(column::PROMPT),
        response: text(column::RESPONSE),
    }
}
