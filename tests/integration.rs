//! Integration tests — the full host-driven plugin lifecycle over a
//! real UDP socket on localhost.

use std::time::Duration;

use remdis_transport::{
    FrameRef, PluginSlot, SendOutcome, TransportError, TransportKind, create,
};
use tokio::net::UdpSocket;
use tokio_test::assert_ok;

// ── Helpers ──────────────────────────────────────────────────────

/// Bind a receiver on an OS-assigned port and return it with the
/// argv the host would pass to the plugin.
async fn ephemeral_receiver() -> (UdpSocket, Vec<String>) {
    let receiver = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let port = receiver.local_addr().unwrap().port();
    let argv = vec!["--ipaddr=127.0.0.1".to_string(), format!("--port={port}")];
    (receiver, argv)
}

async fn recv_datagram(receiver: &UdpSocket) -> Vec<u8> {
    let mut buf = vec![0u8; 65536];
    let (len, _) = tokio::time::timeout(Duration::from_secs(5), receiver.recv_from(&mut buf))
        .await
        .expect("timeout")
        .unwrap();
    buf.truncate(len);
    buf
}

// ── Lifecycle ────────────────────────────────────────────────────

#[tokio::test]
async fn test_plugin_lifecycle() {
    let (receiver, argv) = ephemeral_receiver().await;

    // Host selects the backend and initializes it from argv.
    let transport = tokio_test::assert_ok!(create(TransportKind::Udp, &argv, true).await);
    let mut slot = PluginSlot::install(transport);
    assert!(slot.is_ready());

    // One H.264 start code + NAL header, one datagram.
    let frame = [0x00u8, 0x00, 0x01, 0x67];
    let outcome = slot.send_frame(FrameRef::new(&frame, 0)).await.unwrap();
    assert_eq!(outcome, SendOutcome::Sent { bytes: 4 });
    assert_eq!(recv_datagram(&receiver).await, frame);

    // Destroy: slot becomes unusable, a second destroy is a no-op.
    slot.destroy().await;
    assert!(!slot.is_ready());
    assert!(matches!(
        slot.send_frame(FrameRef::new(&frame, 0)).await,
        Err(TransportError::NotInitialized)
    ));
    slot.destroy().await;
}

#[tokio::test]
async fn test_frame_stream_arrives_in_order_and_verbatim() {
    let (receiver, argv) = ephemeral_receiver().await;
    let transport = create(TransportKind::Udp, &argv, false).await.unwrap();
    let slot = PluginSlot::install(transport);

    // Loopback UDP keeps ordering in practice; the payloads must
    // arrive byte-for-byte untouched.
    for i in 0u8..5 {
        let payload = vec![i; 100 + i as usize];
        let outcome = slot
            .send_frame(FrameRef::new(&payload, i as u32))
            .await
            .unwrap();
        assert!(outcome.is_sent());
        assert_eq!(recv_datagram(&receiver).await, payload);
    }
}

// ── Configuration failures ───────────────────────────────────────

#[tokio::test]
async fn test_empty_address_fails_without_any_traffic() {
    let (receiver, _) = ephemeral_receiver().await;

    let argv = vec!["--ipaddr=".to_string(), "--port=5004".to_string()];
    let err = create(TransportKind::Udp, &argv, false).await.unwrap_err();
    assert!(matches!(err, TransportError::MissingAddress));

    // No transport exists, so the receiver sees nothing.
    let mut buf = [0u8; 64];
    let recv = tokio::time::timeout(Duration::from_millis(200), receiver.recv_from(&mut buf));
    assert!(recv.await.is_err());
}

#[tokio::test]
async fn test_unknown_kind_rejected() {
    let err = "shared-memory".parse::<TransportKind>().unwrap_err();
    assert!(matches!(err, TransportError::UnknownKind(_)));
}
