use leptos::*;

use tripmap_boundary::{BoundsBox, Coordinate, Place};

mod components;
use components::*;

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- signals -- //

    let coordinates = RwSignal::new(DEFAULT_CENTER);
    let bounds = RwSignal::new(None::<BoundsBox>);
    let places = RwSignal::new(Vec::<Place>::new());

    // -- callbacks -- //

    let set_coordinates = Callback::new(move |center: Coordinate| {
        log::debug!("Map center moved to ({}, {})", center.lat, center.lng);
        coordinates.set(center);
    });

    let set_bounds = Callback::new(move |bbox: BoundsBox| {
        log::debug!(
            "Visible area changed: ne = ({}, {}), sw = ({}, {})",
            bbox.ne.lat,
            bbox.ne.lng,
            bbox.sw.lat,
            bbox.sw.lng
        );
        // This is where a host application would re-query places
        // for the new visible area.
        bounds.set(Some(bbox));
    });

    view! {
      <Header />
      <main>
        <Map
          coordinates=Signal::from(coordinates)
          places=Signal::from(places)
          set_coordinates
          set_bounds
        />
      </main>
    }
}
