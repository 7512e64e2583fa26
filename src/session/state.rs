//! Network session with explicit recomputation.

use super::Edit;
use crate::distance::{Center, Distance, DistanceMatrix};
use crate::error::{NetworkError, Result};
use crate::network::Network;
use crate::weather::{Weather, WeatherTable};

/// A network together with the distance snapshot last computed for it.
///
/// Link edits mark the session dirty. While dirty, distance and center
/// queries fail with [`NetworkError::StaleDistances`] until
/// [`recompute`](Session::recompute) is called. Recomputation is never
/// automatic.
///
/// # Examples
///
/// ```
/// use u_roadnet::network::Network;
/// use u_roadnet::distance::Distance;
/// use u_roadnet::session::Session;
///
/// let mut net = Network::new();
/// net.add_edge("A", "B", 5.0).unwrap();
/// net.add_edge("B", "C", 3.0).unwrap();
/// net.add_edge("A", "C", 10.0).unwrap();
///
/// let mut session = Session::new(net);
/// assert_eq!(session.shortest_distance("A", "C").unwrap(), Distance::Finite(8.0));
///
/// session.remove_link("B", "C").unwrap();
/// assert!(session.is_dirty());
/// assert!(session.shortest_distance("A", "C").is_err());
///
/// session.recompute();
/// assert_eq!(session.shortest_distance("A", "C").unwrap(), Distance::Finite(10.0));
/// ```
#[derive(Debug)]
pub struct Session {
    network: Network,
    distances: DistanceMatrix,
}

impl Clone for Session {
    fn clone(&self) -> Self {
        let network = self.network.clone();
        let mut distances = self.distances.clone();
        if !self.is_dirty() {
            distances.rebind(&network);
        }
        Self { network, distances }
    }
}

impl Session {
    /// Starts a session and computes the initial distances.
    pub fn new(network: Network) -> Self {
        let distances = DistanceMatrix::compute(&network);
        Self { network, distances }
    }

    /// The current network.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Consumes the session, returning the network.
    pub fn into_network(self) -> Network {
        self.network
    }

    /// Returns `true` if the network changed since the last computation.
    pub fn is_dirty(&self) -> bool {
        !self.distances.is_current(&self.network)
    }

    /// Recomputes all distances from the current network.
    pub fn recompute(&mut self) -> &DistanceMatrix {
        self.distances = DistanceMatrix::compute(&self.network);
        &self.distances
    }

    /// The distance snapshot, if it matches the current network.
    pub fn distances(&self) -> Result<&DistanceMatrix> {
        self.distances.ensure_current(&self.network)?;
        Ok(&self.distances)
    }

    /// Shortest travel time from `origin` to `destination`.
    pub fn shortest_distance(&self, origin: &str, destination: &str) -> Result<Distance> {
        self.distances()?.shortest_distance(origin, destination)
    }

    /// The graph center.
    pub fn center(&self) -> Result<Center> {
        self.distances()?.center().ok_or(NetworkError::EmptyNetwork)
    }

    /// Removes the link `a → b`, returning its weight.
    pub fn remove_link(&mut self, a: &str, b: &str) -> Result<f64> {
        self.network.remove_edge(a, b)
    }

    /// Creates or overwrites the link `a → b`. Both nodes must exist.
    pub fn set_link(&mut self, a: &str, b: &str, weight: f64) -> Result<Option<f64>> {
        self.network.set_edge_weight(a, b, weight)
    }

    /// Changes the weight of the existing link `a → b`.
    pub fn update_link(&mut self, a: &str, b: &str, weight: f64) -> Result<f64> {
        self.network.update_edge_weight(a, b, weight)
    }

    /// Sets the existing link `a → b` to its recorded time for `weather`.
    ///
    /// Returns the new weight.
    pub fn apply_weather(
        &mut self,
        a: &str,
        b: &str,
        weather: Weather,
        table: &WeatherTable,
    ) -> Result<f64> {
        self.network.link_weight(a, b)?;
        let time = table
            .get(a, b)
            .ok_or_else(|| NetworkError::NoWeatherProfile {
                from: a.to_string(),
                to: b.to_string(),
            })?
            .time(weather);
        self.update_link(a, b, time)?;
        Ok(time)
    }

    /// Applies one edit. Does not recompute.
    pub fn apply(&mut self, edit: &Edit, table: &WeatherTable) -> Result<()> {
        tracing::debug!(%edit, "apply edit");
        match edit {
            Edit::Remove { from, to } => self.remove_link(from, to).map(drop),
            Edit::Set { from, to, weight } => self.set_link(from, to, *weight).map(drop),
            Edit::Update { from, to, weight } => self.update_link(from, to, *weight).map(drop),
            Edit::Weather { from, to, weather } => {
                self.apply_weather(from, to, *weather, table).map(drop)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::WeatherTimes;

    fn session() -> Session {
        let mut net = Network::new();
        net.add_edge("A", "B", 5.0).expect("valid");
        net.add_edge("B", "C", 3.0).expect("valid");
        net.add_edge("A", "C", 10.0).expect("valid");
        Session::new(net)
    }

    fn table() -> WeatherTable {
        let mut t = WeatherTable::new();
        t.insert(
            "A",
            "B",
            WeatherTimes {
                normal: 5.0,
                rain: 7.0,
                snow: 9.0,
                storm: 30.0,
            },
        );
        t
    }

    #[test]
    fn test_fresh_session_is_clean() {
        let s = session();
        assert!(!s.is_dirty());
        assert_eq!(s.center().expect("current").node(), "A");
    }

    #[test]
    fn test_failed_edit_keeps_session_clean() {
        let mut s = session();
        assert!(s.remove_link("C", "A").is_err());
        assert!(s.update_link("A", "Z", 1.0).is_err());
        assert!(!s.is_dirty());
        assert!(s.shortest_distance("A", "C").is_ok());
    }

    #[test]
    fn test_queries_refused_while_dirty() {
        let mut s = session();
        s.set_link("C", "A", 1.0).expect("nodes exist");
        assert!(s.is_dirty());
        assert!(matches!(
            s.shortest_distance("A", "B"),
            Err(NetworkError::StaleDistances { .. })
        ));
        assert!(matches!(
            s.center(),
            Err(NetworkError::StaleDistances { .. })
        ));

        s.recompute();
        assert!(!s.is_dirty());
        assert_eq!(s.shortest_distance("C", "B"), Ok(Distance::Finite(6.0)));
    }

    #[test]
    fn test_set_and_update_differ() {
        let mut s = session();
        assert!(matches!(
            s.update_link("C", "B", 2.0),
            Err(NetworkError::UnknownEdge { .. })
        ));
        assert_eq!(s.set_link("C", "B", 2.0), Ok(None));
        assert_eq!(s.update_link("C", "B", 4.0), Ok(2.0));
    }

    #[test]
    fn test_apply_weather() {
        let mut s = session();
        let t = table();
        assert_eq!(s.apply_weather("A", "B", Weather::Storm, &t), Ok(30.0));
        s.recompute();
        assert_eq!(s.shortest_distance("A", "C"), Ok(Distance::Finite(10.0)));

        assert_eq!(s.apply_weather("A", "B", Weather::Normal, &t), Ok(5.0));
        s.recompute();
        assert_eq!(s.shortest_distance("A", "C"), Ok(Distance::Finite(8.0)));
    }

    #[test]
    fn test_apply_weather_errors() {
        let mut s = session();
        let t = table();
        assert!(matches!(
            s.apply_weather("B", "C", Weather::Rain, &t),
            Err(NetworkError::NoWeatherProfile { .. })
        ));
        assert!(matches!(
            s.apply_weather("B", "A", Weather::Rain, &t),
            Err(NetworkError::UnknownEdge { .. })
        ));
        assert!(!s.is_dirty());
    }

    #[test]
    fn test_apply_edits() {
        let mut s = session();
        let t = table();
        for text in ["remove B C", "set C A 2", "weather A B lluvia"] {
            let edit: Edit = text.parse().expect("valid edit");
            s.apply(&edit, &t).expect("applies");
        }
        s.recompute();
        assert_eq!(s.shortest_distance("A", "C"), Ok(Distance::Finite(10.0)));
        assert_eq!(s.shortest_distance("C", "B"), Ok(Distance::Finite(9.0)));
    }

    #[test]
    fn test_clone_keeps_dirty_state() {
        let s = session();
        let copy = s.clone();
        assert!(!copy.is_dirty());
        assert_eq!(copy.shortest_distance("A", "C"), Ok(Distance::Finite(8.0)));

        let mut edited = session();
        edited.remove_link("B", "C").expect("exists");
        assert!(edited.clone().is_dirty());
    }

    #[test]
    fn test_empty_session_has_no_center() {
        let s = Session::new(Network::new());
        assert_eq!(s.center(), Err(NetworkError::EmptyNetwork));
    }
}
