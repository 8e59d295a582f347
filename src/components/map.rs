use leptos::*;
use leptos_leaflet::{position, MapContainer, MapEvents, Marker, Position, TileLayer, Tooltip};

use tripmap_boundary::{BoundsBox, Coordinate, Place};

/// Fallback center (New Delhi) when no coordinates are provided.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 28.6139,
    lng: 77.209,
};

/// City-level zoom.
const ZOOM: f64 = 14.0;

const MARKER_ICON_URL: &str = "https://maps.gstatic.com/mapfiles/api-3/images/spotlight-poi2.png";
const MARKER_ICON_SIZE: f64 = 30.0;

/// Below this viewport width markers carry a text label.
const LABELED_MARKER_MAX_WIDTH: f64 = 600.0;

/// Resolved at build time; without a key the tile server rejects
/// requests and the canvas stays empty.
const TILE_API_KEY: Option<&str> = option_env!("TRIPMAP_TILE_API_KEY");

const MAP_ATTRIBUTION: &str = "&copy; <a href=\"https://www.maptiler.com/copyright/\">MapTiler</a> \
     &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Map canvas with one marker per place.
///
/// The view holds no coordinate state of its own: center and bounds are
/// read from the live map on drag end and lifted to the parent through
/// `set_coordinates`/`set_bounds`.
#[component]
pub fn Map(
    #[prop(into, optional)] coordinates: Option<Signal<Coordinate>>,
    #[prop(into, optional)] places: Option<Signal<Vec<Place>>>,
    #[prop(into, optional)] set_coordinates: Option<Callback<Coordinate>>,
    #[prop(into, optional)] set_bounds: Option<Callback<BoundsBox>>,
    #[prop(into, optional)] on_child_click: Option<Callback<leaflet::MouseEvent>>,
) -> impl IntoView {
    let coordinates = coordinates.unwrap_or_else(|| Signal::derive(|| DEFAULT_CENTER));
    let places = places.unwrap_or_else(|| Signal::derive(Vec::new));

    let map = RwSignal::<Option<leaflet::Map>>::new(None);

    let push_view_state = move || {
        let Some(map) = map.get_untracked() else {
            log::warn!("No leaflet map found");
            return;
        };
        let center = map.get_center();
        let bounds = map.get_bounds();
        let ne = bounds.get_north_east();
        let sw = bounds.get_south_west();
        let (center, bbox) = view_state(
            (center.lat(), center.lng()),
            (ne.lat(), ne.lng()),
            (sw.lat(), sw.lng()),
        );
        if let Some(set_coordinates) = set_coordinates {
            set_coordinates.call(center);
        }
        if let Some(set_bounds) = set_bounds {
            set_bounds.call(bbox);
        }
    };

    let events = MapEvents::new();
    events.clone().move_end(move |_| {
        push_view_state();
    });
    if let Some(on_child_click) = on_child_click {
        events.clone().mouse_click(move |ev| {
            on_child_click.call(ev);
        });
    }

    let (labeled, set_labeled) = create_signal(marker_labels_visible(viewport_width()));
    _ = window_event_listener(ev::resize, move |_| {
        set_labeled.set(marker_labels_visible(viewport_width()));
    });

    let Coordinate { lat, lng } = coordinates.get_untracked();
    let center = Position::new(lat, lng);

    view! {
      <div class="w-full">
        <MapContainer
          class="w-full h-[85vh]"
          center
          zoom=ZOOM
          map=map.write_only()
          set_view=true
          events
        >
          <TileLayer url=tile_layer_url() attribution=MAP_ATTRIBUTION />
          <For
            each=move || positioned_places(&places.get())
            key=|(name, _)| name.clone()
            let:entry
          >
            <Marker
              position=position!(entry.1.lat, entry.1.lng)
              icon_url=Some(MARKER_ICON_URL.to_string())
              icon_size=Some((MARKER_ICON_SIZE, MARKER_ICON_SIZE))
            >
              {
                let name = entry.0.clone();
                move || {
                  let name = name.clone();
                  labeled.get().then(move || view! {
                    <Tooltip permanent=true direction="top">
                      <span style="color: #333; font-size: 12px; font-weight: bold;">
                        {name}
                      </span>
                    </Tooltip>
                  })
                }
              }
            </Marker>
          </For>
        </MapContainer>
      </div>
    }
}

/// Pairs each place with its validated coordinate; entries that fail
/// coercion render no marker.
fn positioned_places(places: &[Place]) -> Vec<(String, Coordinate)> {
    places
        .iter()
        .filter_map(|place| match place.coordinate() {
            Ok(pos) => Some((place.name.clone(), pos)),
            Err(err) => {
                log::warn!("Skipping place {:?}: {err}", place.name);
                None
            }
        })
        .collect()
}

/// Converts the raw center and corner readings of the map into the
/// values lifted to the parent.
fn view_state(center: (f64, f64), ne: (f64, f64), sw: (f64, f64)) -> (Coordinate, BoundsBox) {
    let center = Coordinate {
        lat: center.0,
        lng: center.1,
    };
    let bbox = BoundsBox {
        ne: Coordinate {
            lat: ne.0,
            lng: ne.1,
        },
        sw: Coordinate {
            lat: sw.0,
            lng: sw.1,
        },
    };
    (center, bbox)
}

/// Icon-only markers on wide viewports, labeled markers on narrow ones
/// where fewer markers are visible at once.
const fn marker_labels_visible(viewport_width: f64) -> bool {
    viewport_width < LABELED_MARKER_MAX_WIDTH
}

fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or_default()
}

fn tile_layer_url() -> String {
    format!(
        "https://api.maptiler.com/maps/streets-v2/{{z}}/{{x}}/{{y}}.png?key={}",
        TILE_API_KEY.unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripmap_boundary::CoordValue;

    fn place(name: &str, lat: CoordValue, lng: CoordValue) -> Place {
        Place {
            name: name.to_string(),
            latitude: lat,
            longitude: lng,
            address: None,
            rating: None,
        }
    }

    #[test]
    fn one_marker_per_valid_place() {
        let places = vec![
            place("Red Fort", 28.6562.into(), 77.241.into()),
            place(
                "India Gate",
                CoordValue::Text("28.6129".to_string()),
                CoordValue::Text("77.2295".to_string()),
            ),
        ];
        let positioned = positioned_places(&places);
        assert_eq!(positioned.len(), 2);
        assert_eq!(positioned[0].0, "Red Fort");
        assert_eq!(
            positioned[1].1,
            Coordinate {
                lat: 28.6129,
                lng: 77.2295
            }
        );
    }

    #[test]
    fn malformed_places_render_no_marker() {
        let places = vec![
            place("ok", 12.0.into(), 34.0.into()),
            place("bad", CoordValue::Text("north".to_string()), 34.0.into()),
            place("out of range", 123.0.into(), 34.0.into()),
        ];
        let positioned = positioned_places(&places);
        assert_eq!(positioned.len(), 1);
        assert_eq!(positioned[0].0, "ok");
    }

    #[test]
    fn labels_only_on_narrow_viewports() {
        assert!(marker_labels_visible(320.0));
        assert!(marker_labels_visible(599.9));
        assert!(!marker_labels_visible(600.0));
        assert!(!marker_labels_visible(1920.0));
    }

    #[test]
    fn default_center_is_new_delhi() {
        assert_eq!(
            DEFAULT_CENTER,
            Coordinate {
                lat: 28.6139,
                lng: 77.209
            }
        );
    }

    #[test]
    fn drag_end_view_state_conversion() {
        let (center, bbox) = view_state((12.0, 34.0), (13.0, 35.0), (11.0, 33.0));
        assert_eq!(center, Coordinate { lat: 12.0, lng: 34.0 });
        assert_eq!(
            bbox,
            BoundsBox {
                ne: Coordinate { lat: 13.0, lng: 35.0 },
                sw: Coordinate { lat: 11.0, lng: 33.0 },
            }
        );
    }

    #[test]
    fn tile_url_is_keyed_template() {
        let url = tile_layer_url();
        assert!(url.starts_with("https://api.maptiler.com/"));
        assert!(url.contains("{z}/{x}/{y}"));
        assert!(url.contains("?key="));
    }
}
