mod support;

use spotifork::{
    error::SpotiforkError,
    playlist::{MERGE_PLACEHOLDER_NAME, fork, merge, write_tracks},
    types::{PlaylistRef, TrackList, TrackRef},
};
use support::{Call, FakeSpotify, Failure, TOKEN};

fn numbered_tracks(count: usize) -> TrackList {
    (0..count).map(|i| TrackRef::from_track_id(&format!("t{i}"))).collect()
}

// =============================================================================
// Batched writer
// =============================================================================

#[tokio::test]
async fn test_write_tracks_chunks_by_hundred() {
    for count in [0usize, 1, 99, 100, 101, 250, 300] {
        let fake = FakeSpotify::new("me").with_playlist("target", "Target", "me", &[]);
        let tracks = numbered_tracks(count);

        let written = write_tracks(&fake, TOKEN, &tracks, "target", "me").await.unwrap();
        assert_eq!(written, count);

        let calls = fake.add_track_calls();
        assert_eq!(calls.len(), count.div_ceil(100), "calls for {count} tracks");
        assert!(calls.iter().all(|c| !c.is_empty() && c.len() <= 100));

        let concatenated: Vec<String> = calls.into_iter().flatten().collect();
        let expected: Vec<String> = tracks.iter().map(|t| t.to_string()).collect();
        assert_eq!(concatenated, expected);
    }
}

#[tokio::test]
async fn test_write_tracks_stops_at_first_failing_chunk() {
    let fake = FakeSpotify::new("me")
        .with_playlist("target", "Target", "me", &[])
        .failing(Failure::AddTracks(2));
    let tracks = numbered_tracks(350);

    let err = write_tracks(&fake, TOKEN, &tracks, "target", "me").await.unwrap_err();

    match err {
        SpotiforkError::PartialWrite { written, total, .. } => {
            assert_eq!(written, 100);
            assert_eq!(total, 350);
        }
        other => panic!("Expected PartialWrite, got {other:?}"),
    }
    // no third chunk after the failure
    assert_eq!(fake.add_track_calls().len(), 2);
    assert_eq!(fake.playlist("target").unwrap().added.len(), 100);
}

#[tokio::test]
async fn test_write_tracks_failing_first_chunk_is_not_partial() {
    let fake = FakeSpotify::new("me")
        .with_playlist("target", "Target", "me", &[])
        .failing(Failure::AddTracks(1));

    let err = write_tracks(&fake, TOKEN, &numbered_tracks(10), "target", "me")
        .await
        .unwrap_err();

    assert!(matches!(err, SpotiforkError::Api { status: 500, .. }));
}

// =============================================================================
// Fork
// =============================================================================

#[tokio::test]
async fn test_fork_copies_playlist() {
    let fake = FakeSpotify::new("me").with_playlist(
        "src",
        "Road Trip",
        "alice",
        &[Some("t1"), None, Some("t2"), Some("t1")],
    );

    let outcome = fork(&fake, TOKEN, "src", "alice", "me", false).await.unwrap();

    assert_eq!(outcome.name, "Fork of Road Trip");
    assert_eq!(outcome.tracks_written, 2);

    let created = fake.playlist(&outcome.playlist_id).unwrap();
    assert_eq!(created.name, "Fork of Road Trip");
    assert_eq!(created.owner, "me");
    assert!(!created.public);
    assert_eq!(created.added, vec!["spotify:track:t1", "spotify:track:t2"]);
}

#[tokio::test]
async fn test_fork_reads_source_playlist_once() {
    let fake = FakeSpotify::new("me").with_playlist("src", "Road Trip", "alice", &[Some("t1")]);

    fork(&fake, TOKEN, "src", "alice", "me", false).await.unwrap();

    let reads = fake
        .calls()
        .iter()
        .filter(|c| matches!(c, Call::GetPlaylist { .. }))
        .count();
    assert_eq!(reads, 1);
}

#[tokio::test]
async fn test_fork_of_250_tracks_writes_three_batches() {
    let fake = FakeSpotify::new("me").with_numbered_playlist("src", "Big", "alice", "t", 250);

    let outcome = fork(&fake, TOKEN, "src", "alice", "me", true).await.unwrap();

    let sizes: Vec<usize> = fake.add_track_calls().iter().map(|c| c.len()).collect();
    assert_eq!(sizes, vec![100, 100, 50]);
    assert_eq!(outcome.tracks_written, 250);
    assert!(fake.playlist(&outcome.playlist_id).unwrap().public);
}

#[tokio::test]
async fn test_fork_never_writes_local_tracks() {
    let fake = FakeSpotify::new("me").with_playlist("src", "Mixed", "alice", &[None, Some("t1"), None]);

    fork(&fake, TOKEN, "src", "alice", "me", false).await.unwrap();

    let written: Vec<String> = fake.add_track_calls().into_iter().flatten().collect();
    assert_eq!(written, vec!["spotify:track:t1"]);
}

#[tokio::test]
async fn test_fork_of_missing_playlist_creates_nothing() {
    let fake = FakeSpotify::new("me");

    let err = fork(&fake, TOKEN, "nope", "alice", "me", false).await.unwrap_err();

    assert!(err.to_string().contains("getting the original playlist"));
    assert!(matches!(err.root(), SpotiforkError::NotFound { .. }));
    assert!(!fake.calls().iter().any(|c| matches!(c, Call::Create { .. })));
}

#[tokio::test]
async fn test_fork_create_failure_stops_before_copying() {
    let fake = FakeSpotify::new("me")
        .with_playlist("src", "Road Trip", "alice", &[Some("t1")])
        .failing(Failure::Create);

    let err = fork(&fake, TOKEN, "src", "alice", "me", false).await.unwrap_err();

    assert!(err.to_string().starts_with("There was an error creating the new playlist"));
    assert!(!fake.calls().iter().any(|c| matches!(c, Call::GetTracks { .. })));
}

#[tokio::test]
async fn test_fork_keeps_created_playlist_when_copy_fails() {
    let fake = FakeSpotify::new("me")
        .with_playlist("src", "Road Trip", "alice", &[Some("t1")])
        .failing(Failure::TracksAt {
            playlist_id: "src".to_string(),
            offset: 0,
        });

    let err = fork(&fake, TOKEN, "src", "alice", "me", false).await.unwrap_err();

    assert!(err.to_string().contains("copying the songs"));
    let created = fake.playlist("created-1").unwrap();
    assert_eq!(created.name, "Fork of Road Trip");
    assert!(created.added.is_empty());
}

// =============================================================================
// Merge
// =============================================================================

#[tokio::test]
async fn test_merge_creates_renames_and_dedupes() {
    let fake = FakeSpotify::new("me")
        .with_playlist("A", "A", "ownerX", &[Some("t1"), Some("t2")])
        .with_playlist("B", "B", "ownerY", &[Some("t2"), Some("t3")]);

    let sources = vec![PlaylistRef::new("A", "ownerX"), PlaylistRef::new("B", "ownerY")];
    let outcome = merge(&fake, TOKEN, &sources, "me", false).await.unwrap();

    assert_eq!(outcome.name, "Merge of A & B");
    let created = fake.playlist(&outcome.playlist_id).unwrap();
    assert_eq!(created.name, "Merge of A & B");
    assert_eq!(
        created.added,
        vec!["spotify:track:t1", "spotify:track:t2", "spotify:track:t3"]
    );

    let calls = fake.calls();
    assert_eq!(
        calls.first(),
        Some(&Call::Create {
            owner_id: "me".to_string(),
            name: MERGE_PLACEHOLDER_NAME.to_string(),
            public: false,
        })
    );
    assert_eq!(
        calls.last(),
        Some(&Call::Rename {
            playlist_id: outcome.playlist_id.clone(),
            name: "Merge of A & B".to_string(),
            public: false,
        })
    );
}

#[tokio::test]
async fn test_merge_rejects_empty_sources() {
    let fake = FakeSpotify::new("me");

    let err = merge(&fake, TOKEN, &[], "me", false).await.unwrap_err();

    assert!(matches!(err, SpotiforkError::InvalidInput(_)));
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_merge_failure_skips_rename() {
    let fake = FakeSpotify::new("me")
        .with_playlist("A", "A", "ownerX", &[Some("t1")])
        .failing(Failure::GetPlaylist("B".to_string()));

    let sources = vec![PlaylistRef::new("A", "ownerX"), PlaylistRef::new("B", "ownerY")];
    let err = merge(&fake, TOKEN, &sources, "me", false).await.unwrap_err();

    assert!(err.to_string().contains("processing the playlists"));
    assert!(!fake.calls().iter().any(|c| matches!(c, Call::Rename { .. })));
    assert!(fake.add_track_calls().is_empty());
    assert_eq!(fake.playlist("created-1").unwrap().name, MERGE_PLACEHOLDER_NAME);
}

#[tokio::test]
async fn test_merge_write_failure_skips_rename() {
    let fake = FakeSpotify::new("me")
        .with_numbered_playlist("A", "A", "ownerX", "a", 150)
        .failing(Failure::AddTracks(2));

    let err = merge(&fake, TOKEN, &[PlaylistRef::new("A", "ownerX")], "me", true)
        .await
        .unwrap_err();

    assert!(matches!(
        err.root(),
        SpotiforkError::Api { status: 500, .. }
    ));
    assert!(err.to_string().contains("Added 100 of 150 tracks"));
    assert!(!fake.calls().iter().any(|c| matches!(c, Call::Rename { .. })));
    assert_eq!(fake.playlist("created-1").unwrap().name, MERGE_PLACEHOLDER_NAME);
}

#[tokio::test]
async fn test_merge_rename_failure_is_reported() {
    let fake = FakeSpotify::new("me")
        .with_playlist("A", "A", "ownerX", &[Some("t1")])
        .failing(Failure::Rename);

    let err = merge(&fake, TOKEN, &[PlaylistRef::new("A", "ownerX")], "me", false)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("updating the new playlist name"));
    // tracks were written before the rename
    assert_eq!(fake.playlist("created-1").unwrap().added, vec!["spotify:track:t1"]);
}
