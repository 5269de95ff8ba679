use cinema_tickets::clients::{PaymentClient, ReservationClient};
use cinema_tickets::framework::mock::MockClient;
use cinema_tickets::framework::FrameworkError;
use cinema_tickets::gateways::{
    GatewayError, PaymentAction, PaymentActionResult, PaymentLedger, SeatAction, SeatActionResult,
    SeatBooking,
};
use cinema_tickets::model::{
    AccountId, RawTicketRequest, TicketReservationResponse, TicketType, TicketTypeMapping,
    TicketTypeRequest,
};
use cinema_tickets::ticket_service::{PurchaseConfig, PurchaseError, TicketService, MAX_TICKETS_LIMIT};

fn account(id: i64) -> AccountId {
    AccountId::try_from(id).unwrap()
}

fn service_over(
    payment_mock: &MockClient<PaymentLedger>,
    seat_mock: &MockClient<SeatBooking>,
) -> TicketService<PaymentClient, ReservationClient> {
    TicketService::new(
        PaymentClient::new(payment_mock.client()),
        ReservationClient::new(seat_mock.client()),
    )
}

/// Real ticket service with mocked gateways: the collaborators receive exactly the
/// priced totals, payment first.
#[tokio::test]
async fn test_service_charges_and_reserves_priced_totals() {
    let mut payment_mock = MockClient::<PaymentLedger>::new();
    let mut seat_mock = MockClient::<SeatBooking>::new();

    payment_mock
        .expect_action(account(4))
        .return_ok(PaymentActionResult::Charged { total_charged: 80 });
    seat_mock
        .expect_action(account(4))
        .return_ok(SeatActionResult::Reserved { seats_reserved: 4 });

    let service = service_over(&payment_mock, &seat_mock);

    // Raw entries as they would arrive from an outer adapter
    let requests: Vec<RawTicketRequest> = serde_json::from_str(
        r#"[
            { "type": "ADULT", "count": 2 },
            { "type": "INFANT", "count": 1 },
            { "type": "CHILD", "count": 2 }
        ]"#,
    )
    .unwrap();

    let receipt = service.purchase_raw_tickets(4, &requests).await.unwrap();
    assert_eq!(receipt, TicketReservationResponse::new(5, 80, 4));

    assert_eq!(
        payment_mock.received_actions(),
        vec![(account(4), PaymentAction::MakePayment(80))]
    );
    assert_eq!(
        seat_mock.received_actions(),
        vec![(account(4), SeatAction::ReserveSeat(4))]
    );
    payment_mock.verify();
    seat_mock.verify();
}

/// Malformed raw entries never reach the gateways.
#[tokio::test]
async fn test_malformed_entries_are_rejected_before_any_gateway_call() {
    let payment_mock = MockClient::<PaymentLedger>::new();
    let seat_mock = MockClient::<SeatBooking>::new();
    let service = service_over(&payment_mock, &seat_mock);

    let cases = [
        r#"[{ "type": "ADULT", "count": -1 }]"#,
        r#"[{ "type": "ADULT", "count": 0 }]"#,
        r#"[{ "type": "", "count": 0 }]"#,
        r#"[{ "type": "SENIOR", "count": 0 }]"#,
        r#"[{ "type": "ADULT" }]"#,
        r#"[{ "count": -1 }]"#,
        r#"[{ "type": "ADULT", "count": 1 }, { "type": "ADULT", "count": 0 }]"#,
    ];
    for json in cases {
        let requests: Vec<RawTicketRequest> = serde_json::from_str(json).unwrap();
        let result = service.purchase_raw_tickets(1, &requests).await;
        match result {
            Err(e @ PurchaseError::InvalidTicketRequest(_)) => {
                assert!(e.to_string().starts_with("Invalid ticket request found"))
            }
            other => panic!("{json} should be rejected, got {other:?}"),
        }
    }

    assert_eq!(payment_mock.action_count(), 0);
    assert_eq!(seat_mock.action_count(), 0);
}

/// A failed payment is returned as-is and the reservation is never attempted.
#[tokio::test]
async fn test_payment_failure_stops_before_reservation() {
    let mut payment_mock = MockClient::<PaymentLedger>::new();
    let seat_mock = MockClient::<SeatBooking>::new();

    payment_mock
        .expect_action(account(1))
        .return_err(FrameworkError::Custom("card declined".to_string()));

    let service = service_over(&payment_mock, &seat_mock);
    let requests = [RawTicketRequest::new("ADULT", 1)];

    let result = service.purchase_raw_tickets(1, &requests).await;
    assert_eq!(
        result,
        Err(PurchaseError::Gateway(GatewayError::Payment(
            "Custom error: card declined".to_string()
        )))
    );

    payment_mock.verify();
    assert_eq!(seat_mock.action_count(), 0);
}

/// A maximum large enough to overflow the cost is refused; at the largest accepted
/// maximum the gateway is charged the exact price.
#[tokio::test]
async fn test_large_maximum_never_clamps_the_charge() {
    assert_eq!(PurchaseConfig::new(300_000_000), None);

    let mut payment_mock = MockClient::<PaymentLedger>::new();
    let mut seat_mock = MockClient::<SeatBooking>::new();
    let cost = MAX_TICKETS_LIMIT * TicketTypeMapping::ADULT;

    payment_mock
        .expect_action(account(1))
        .return_ok(PaymentActionResult::Charged {
            total_charged: u64::from(cost),
        });
    seat_mock
        .expect_action(account(1))
        .return_ok(SeatActionResult::Reserved {
            seats_reserved: u64::from(MAX_TICKETS_LIMIT),
        });

    let service = TicketService::with_config(
        PaymentClient::new(payment_mock.client()),
        ReservationClient::new(seat_mock.client()),
        PurchaseConfig::new(MAX_TICKETS_LIMIT).unwrap(),
    );
    let requests = [TicketTypeRequest::new(TicketType::Adult, MAX_TICKETS_LIMIT).unwrap()];

    let receipt = service.purchase_tickets(1, &requests).await.unwrap();
    assert_eq!(
        receipt,
        TicketReservationResponse::new(MAX_TICKETS_LIMIT, cost, MAX_TICKETS_LIMIT)
    );
    assert_eq!(
        payment_mock.received_actions(),
        vec![(account(1), PaymentAction::MakePayment(cost))]
    );
    payment_mock.verify();
    seat_mock.verify();
}
