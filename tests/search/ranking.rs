//! Ranking order over the fixture server list.

use super::common::{position_of, ranked_cities, servers};
use pingmap::{find_results, rank, sort_servers, SearchOptions, Server};

#[test]
fn test_country_query_ranks_shorter_labels_first() {
    let servers = servers();
    let ranked = find_results("united states", &servers);
    assert_eq!(
        ranked_cities(&servers, &ranked),
        vec!["Newark", "Los Angeles", "New York City"]
    );
}

#[test]
fn test_country_query_distances() {
    let servers = servers();
    let matches = rank("United States", &servers, &SearchOptions::default()).unwrap();

    let expected = [("Newark", 0.06), ("Los Angeles", 0.10), ("New York City", 0.11)];
    assert_eq!(matches.len(), expected.len());
    for (m, (city, distance)) in matches.iter().zip(expected) {
        assert_eq!(m.position, position_of(&servers, city));
        assert!(
            (m.distance - distance).abs() < 1e-9,
            "{}: {} != {}",
            city,
            m.distance,
            distance
        );
    }
}

#[test]
fn test_city_query_finds_only_that_city() {
    let servers = servers();
    assert_eq!(
        find_results("new york", &servers),
        vec![position_of(&servers, "New York City")]
    );
    assert_eq!(find_results("tokyo", &servers), vec![position_of(&servers, "Tokyo")]);
    assert_eq!(find_results("paris", &servers), vec![position_of(&servers, "Paris")]);
}

#[test]
fn test_country_alone_finds_its_server() {
    let servers = servers();
    assert_eq!(find_results("Japan", &servers), vec![position_of(&servers, "Tokyo")]);
}

#[test]
fn test_empty_query_lists_everything_shortest_first() {
    let servers = servers();
    let ranked = find_results("", &servers);
    assert_eq!(
        ranked_cities(&servers, &ranked),
        vec![
            "Tokyo",
            "Paris",
            "Toronto",
            "Sydney",
            "Frankfurt",
            "Newark",
            "London",
            "Amsterdam",
            "Los Angeles",
            "New York City",
        ]
    );
}

#[test]
fn test_nothing_close_returns_nothing() {
    let servers = servers();
    assert!(find_results("zzzz", &servers).is_empty());
}

#[test]
fn test_identical_labels_keep_input_order() {
    let servers = vec![
        Server::new("Springfield", "United States", 0.2, 0.3),
        Server::new("Shelbyville", "United States", 0.2, 0.3),
        Server::new("Springfield", "United States", 0.3, 0.3),
    ];
    assert_eq!(find_results("springfield", &servers), vec![0, 2]);
}

#[test]
fn test_search_over_sorted_list() {
    let sorted = sort_servers(&servers());
    let ranked = find_results("united states", &sorted);
    assert_eq!(
        ranked_cities(&sorted, &ranked),
        vec!["Newark", "Los Angeles", "New York City"]
    );
}

#[test]
fn test_sorted_by_country_then_city() {
    let sorted = sort_servers(&servers());
    let cities: Vec<&str> = sorted.iter().map(|s| s.city.as_str()).collect();
    assert_eq!(
        cities,
        vec![
            "Sydney",
            "Toronto",
            "Paris",
            "Frankfurt",
            "Tokyo",
            "Amsterdam",
            "London",
            "Los Angeles",
            "New York City",
            "Newark",
        ]
    );
}
