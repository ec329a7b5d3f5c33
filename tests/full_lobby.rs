//! End-to-end walk of a lobby: rock-paper-scissors tiebreak, captain
//! draft, series recording, and the stats that land in storage.

use serenity::model::id::{ChannelId, UserId};

use inhouse::db::memory::MemoryStore;
use inhouse::db::store::StatsStore;
use inhouse::draft::{session::CAPTAIN_PICKS, DraftSession, PickSuccess};
use inhouse::registry::SessionRegistry;
use inhouse::series::{RecordSuccess, Series, SeriesStatus, SeriesType};
use inhouse::tiebreak::{Choice, TiebreakGame};
use inhouse::{Participant, Participants, Team};

fn player(n: u64) -> Participant {
    Participant::new(UserId::new(n), format!("player{n}"))
}

#[tokio::test]
async fn tiebreak_draft_series_and_stats() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let channel = ChannelId::new(777);

    // Captains 1 and 2 throw for first pick; paper covers rock.
    let mut tiebreak = TiebreakGame::new(player(1), player(2));
    assert!(!tiebreak.submit(UserId::new(1), Choice::Paper).unwrap());
    assert!(tiebreak.submit(UserId::new(2), Choice::Rock).unwrap());
    let winner = tiebreak.resolve().unwrap().cloned().expect("not a tie");
    assert_eq!(winner.user_id(), UserId::new(1));

    // The winner drafts first on blue; the other eight players queue up.
    let pool: Participants = (3..=10).map(player).collect();
    let session = DraftSession::new(Team::Blue, winner, player(2), pool).unwrap();

    let mut drafts = SessionRegistry::new();
    drafts.insert(channel, session);

    // Captains alternate through the whole snake order, always taking the
    // front of the pool.
    let session = drafts.get_mut(channel).unwrap();
    loop {
        let team = match session.currently_picking() {
            Some(team) => team,
            None => break,
        };
        let next = session.remaining().next().unwrap().user_id();
        let outcome = session.pick(team, next).unwrap();
        if outcome == PickSuccess::Complete {
            break;
        }
    }
    assert!(session.is_complete());
    assert_eq!(session.pick_index(), CAPTAIN_PICKS);
    let teams = session.teams().unwrap();
    assert!(drafts.remove(channel).is_some());

    // Everyone gets a profile before the series starts.
    let store = MemoryStore::new();
    for participant in teams.blue.iter().chain(teams.red.iter()) {
        store
            .get_or_create_user(participant.user_id().get(), participant.name())
            .await
            .unwrap();
    }

    let blue_ids: Vec<u64> = teams.blue.iter().map(|p| p.user_id().get()).collect();
    let red_ids: Vec<u64> = teams.red.iter().map(|p| p.user_id().get()).collect();
    let record = store
        .create_match(SeriesType::BestOf3, &blue_ids, &red_ids)
        .await
        .unwrap();

    // Red drops game one but takes the series.
    let mut series = Series::new(SeriesType::BestOf3);
    for (game, winner) in [(1, Team::Blue), (2, Team::Red), (3, Team::Red)] {
        let outcome = series.record_game(game, winner).unwrap();
        store
            .record_game(&record.match_id, game, winner)
            .await
            .unwrap();
        if let RecordSuccess::Completed { winner } = outcome {
            store.complete_match(&record.match_id, winner).await.unwrap();
        }
    }
    assert_eq!(series.status(), SeriesStatus::Completed);
    assert_eq!(series.winner(), Some(Team::Red));
    assert_eq!(series.score(), (1, 2));

    // Stats: every red player 1-1-0, every blue player 1-0-1.
    for id in &red_ids {
        let profile = store.get_user(*id).await.unwrap().unwrap();
        assert_eq!((profile.total_games, profile.total_wins), (1, 1));
    }
    for id in &blue_ids {
        let profile = store.get_user(*id).await.unwrap().unwrap();
        assert_eq!((profile.total_games, profile.total_wins), (1, 0));
    }

    // The leaderboard only carries players with games, winners on top.
    store.get_or_create_user(99, "spectator").await.unwrap();
    let board = store.leaderboard(20).await.unwrap();
    assert_eq!(board.len(), 10);
    assert!(board[..5].iter().all(|p| red_ids.contains(&p.discord_id)));
    assert!(board[5..].iter().all(|p| blue_ids.contains(&p.discord_id)));
}
