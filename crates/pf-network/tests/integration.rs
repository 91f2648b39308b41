//! Integration tests for pf-network.

use pf_core::{Tolerances, nearly_equal};
use pf_network::{Device, ErrorKind, FlowDevice, Mixer, NetworkError, Reactor, StreamTable};

const EPS: f64 = 1e-2;

#[test]
fn mixer_two_inputs_one_output() {
    let mut streams = StreamTable::new();
    let s1 = streams.add_next();
    let s2 = streams.add_next();
    let s3 = streams.add_next();
    streams.set_mass_flow(s1, 10.0).unwrap();
    streams.set_mass_flow(s2, 5.0).unwrap();

    let mut mixer = Mixer::new(2);
    mixer.add_input(s1).unwrap();
    mixer.add_input(s2).unwrap();
    mixer.add_output(s3).unwrap();
    mixer.update_outputs(&mut streams).unwrap();

    assert!((streams.mass_flow(s3).unwrap() - 15.0).abs() < EPS);
}

#[test]
fn mixer_third_input_rejected() {
    let mut streams = StreamTable::new();
    let ids: Vec<_> = (0..4).map(|_| streams.add_next()).collect();

    let mut mixer = Mixer::new(2);
    mixer.add_input(ids[0]).unwrap();
    mixer.add_input(ids[1]).unwrap();
    mixer.add_output(ids[2]).unwrap();

    let err = mixer.add_input(ids[3]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InputLimitExceeded);
    assert_eq!(mixer.inputs(), vec![ids[0], ids[1]]);
}

#[test]
fn double_reactor_splits_evenly() {
    let mut streams = StreamTable::new();
    let feed = streams.add_next();
    let o1 = streams.add_next();
    let o2 = streams.add_next();
    streams.set_mass_flow(feed, 10.0).unwrap();

    let mut reactor = Reactor::new(true);
    reactor.add_input(feed).unwrap();
    reactor.add_output(o1).unwrap();
    reactor.add_output(o2).unwrap();
    reactor.update_outputs(&mut streams).unwrap();

    let a = streams.mass_flow(o1).unwrap();
    let b = streams.mass_flow(o2).unwrap();
    assert!((a - 5.0).abs() < EPS);
    assert!((b - 5.0).abs() < EPS);
    assert!((a + b - 10.0).abs() < EPS);
}

#[test]
fn single_reactor_second_output_rejected() {
    let mut streams = StreamTable::new();
    let feed = streams.add_next();
    let o1 = streams.add_next();
    let o2 = streams.add_next();

    let mut reactor = Reactor::new(false);
    reactor.add_input(feed).unwrap();
    reactor.add_output(o1).unwrap();

    match reactor.add_output(o2) {
        Err(NetworkError::OutputLimitExceeded { message, capacity }) => {
            assert_eq!(message, "OUTPUT STREAM LIMIT!");
            assert_eq!(capacity, 1);
        }
        other => panic!("expected output limit, got {other:?}"),
    }
}

#[test]
fn shared_stream_chains_devices() {
    // feed_a + feed_b -> [mixer] -> mid -> [reactor] -> left, right
    let mut streams = StreamTable::new();
    let feed_a = streams.add("feed_a");
    let feed_b = streams.add("feed_b");
    let mid = streams.add("mid");
    let left = streams.add("left");
    let right = streams.add("right");
    streams.set_mass_flow(feed_a, 6.0).unwrap();
    streams.set_mass_flow(feed_b, 2.0).unwrap();

    let mut network: Vec<Device> = vec![Device::mixer(2), Device::reactor(true)];
    network[0].add_input(feed_a).unwrap();
    network[0].add_input(feed_b).unwrap();
    network[0].add_output(mid).unwrap();
    network[1].add_input(mid).unwrap();
    network[1].add_output(left).unwrap();
    network[1].add_output(right).unwrap();

    for device in &network {
        device.update_outputs(&mut streams).unwrap();
    }

    let tol = Tolerances::default();
    assert!(nearly_equal(streams.mass_flow(mid).unwrap(), 8.0, tol));
    assert!(nearly_equal(streams.mass_flow(left).unwrap(), 4.0, tol));
    assert!(nearly_equal(streams.mass_flow(right).unwrap(), 4.0, tol));
    for device in &network {
        assert!(nearly_equal(device.mass_balance(&streams).unwrap(), 0.0, tol));
    }
}

#[test]
fn reactor_without_anything_attached() {
    let mut streams = StreamTable::new();
    let reactor = Reactor::new(false);
    assert_eq!(
        reactor.update_outputs(&mut streams).unwrap_err().kind(),
        ErrorKind::MissingElement
    );
}

#[test]
fn foreign_handle_leaves_streams_untouched() {
    let mut other = StreamTable::new();
    for _ in 0..5 {
        other.add_next();
    }
    let foreign = other.add_next();

    let mut streams = StreamTable::new();
    let feed = streams.add_next();
    let out = streams.add_next();
    streams.set_mass_flow(feed, 3.0).unwrap();
    streams.set_mass_flow(out, 9.0).unwrap();

    let mut mixer = Mixer::new(1);
    mixer.add_input(feed).unwrap();
    mixer.add_output(foreign).unwrap();

    let err = mixer.update_outputs(&mut streams).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownStream);
    assert_eq!(streams.mass_flow(out).unwrap(), 9.0);
}

#[test]
fn print_lines_for_every_stream() {
    let mut streams = StreamTable::new();
    let s1 = streams.add_next();
    let s2 = streams.add_next();
    streams.set_mass_flow(s1, 10.0).unwrap();
    streams.set_mass_flow(s2, 5.0).unwrap();

    let mut out = Vec::new();
    for (_, stream) in streams.iter() {
        stream.write_line(&mut out).unwrap();
    }
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Stream s1 flow = 10\nStream s2 flow = 5\n"
    );
}
