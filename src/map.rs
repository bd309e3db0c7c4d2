use std::fs::File;
use std::io::Write;

#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    pub label: String
}

impl Marker {
    pub fn new(lat: f64, lng: f64, label: String) -> Self {
        Marker {
            lat: lat,
            lng: lng,
            label: label
        }
    }
}

///
/// Render located addresses onto a standalone HTML map, centered on the
/// first marker. Writes nothing when there are no markers.
///
pub fn create_map(markers: &Vec<Marker>, output: &String) -> Result<(), std::io::Error> {
    let center = match markers.first() {
        Some(center) => center,
        None => { return Ok(()); }
    };

    let features = serde_json::to_string(markers)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;

    let html = format!(r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8"/>
<title>Address Map</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.6.0/dist/leaflet.css"/>
<script src="https://unpkg.com/leaflet@1.6.0/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
    var map = L.map('map').setView([{lat}, {lng}], 14);

    L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
        attribution: '&copy; OpenStreetMap contributors'
    }}).addTo(map);

    var markers = {markers};

    markers.forEach(function (marker) {{
        L.marker([marker.lat, marker.lng]).bindTooltip(marker.label).addTo(map);
    }});
</script>
</body>
</html>
"#, lat = center.lat, lng = center.lng, markers = features);

    let mut file = File::create(output)?;
    file.write_all(html.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_map() {
        let path = std::env::temp_dir().join("map_test.html");
        let output = path.to_string_lossy().to_string();

        create_map(&vec![
            Marker::new(4.60971, -74.08175, String::from("Carrera 10 # 20-30")),
            Marker::new(4.64860, -74.06295, String::from("Calle 50 # 50-50"))
        ], &output).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("L.marker"));
        assert!(html.contains("Carrera 10 # 20-30"));
        assert!(html.contains("setView([4.60971, -74.08175], 14)"));
    }

    #[test]
    fn test_create_map_empty() {
        let path = std::env::temp_dir().join("map_test_empty.html");
        let output = path.to_string_lossy().to_string();

        // no markers, nothing rendered
        create_map(&vec![], &output).unwrap();
        assert_eq!(path.exists(), false);
    }
}
