mod scenarios {
  use exact_hull::algorithms::convex_hull::*;
  use exact_hull::data::*;
  use exact_hull::verification::*;
  use exact_hull::*;

  use claims::{assert_err, assert_ok};

  fn points(coords: &[[i64; 2]]) -> Vec<Point<Rational>> {
    coords
      .iter()
      .map(|&[x, y]| Point::new([Rational::from(x), Rational::from(y)]))
      .collect()
  }

  fn parse_point(x: &str, y: &str) -> Result<Point<Rational>, Error> {
    Ok(Point::new([x.parse()?, y.parse()?]))
  }

  // Same cyclic sequence, possibly starting at another vertex.
  fn same_cycle(hull: &Hull<Rational>, expected: &[Point<Rational>]) -> bool {
    let n = expected.len();
    hull.len() == n
      && (0..n.max(1)).any(|shift| (0..n).all(|i| hull[i] == expected[(i + shift) % n]))
  }

  #[test]
  fn unit_square() {
    let square = points(&[[0, 0], [1, 0], [1, 1], [0, 1]]);
    for algorithm in Algorithm::ALL {
      let hull = assert_ok!(algorithm.convex_hull(square.clone(), &CancelToken::new()));
      assert!(same_cycle(&hull, &square), "{}: {:?}", algorithm, hull);
      assert_ok!(verify(&square, &hull));
    }
  }

  #[test]
  fn unit_square_with_centre() -> Result<(), Error> {
    let mut input = points(&[[0, 0], [1, 0], [1, 1], [0, 1]]);
    let centre = parse_point("1/2", "0.5")?;
    input.push(centre.clone());
    for algorithm in Algorithm::ALL {
      let hull = assert_ok!(algorithm.convex_hull(input.clone(), &CancelToken::new()));
      assert_eq!(hull.len(), 4);
      assert!(!hull.contains(&centre));
      assert!(is_valid(&input, &hull));
    }
    Ok(())
  }

  #[test]
  fn three_colinear_points() {
    let input = points(&[[0, 0], [1, 0], [2, 0]]);
    for algorithm in Algorithm::ALL {
      let hull = assert_ok!(algorithm.convex_hull(input.clone(), &CancelToken::new()));
      assert_eq!(hull.vertices(), points(&[[0, 0], [2, 0]]).as_slice());
      assert_ok!(verify(&input, &hull));
    }
  }

  #[test]
  fn pre_cancelled_token() {
    let token = CancelToken::new();
    token.cancel();
    let input = points(&[[0, 0], [1, 0], [1, 1], [0, 1]]);
    for algorithm in Algorithm::ALL {
      let cancelled = assert_err!(algorithm.convex_hull(input.clone(), &token));
      assert!(cancelled.partial.len() <= 1);
      assert_eq!(Error::from(cancelled), Error::AlgorithmTimeout);
    }
  }

  #[test]
  fn empty_input() {
    let input: Vec<Point<Rational>> = vec![];
    for algorithm in Algorithm::ALL {
      let hull = assert_ok!(algorithm.convex_hull(input.clone(), &CancelToken::new()));
      assert!(hull.is_empty());
      assert_ok!(verify(&input, &hull));
    }
  }

  #[test]
  fn parse_round_trip() -> Result<(), Error> {
    for literal in ["1233", "-8093487041873/870780", "212.0231", "-1.5E-3", "0/7"] {
      let value: Rational = literal.parse()?;
      let again: Rational = value.to_string().parse()?;
      assert_eq!(again, value);
    }
    Ok(())
  }

  #[test]
  fn unreduced_equality() -> Result<(), Error> {
    assert_eq!(Rational::new(2, 4)?, Rational::new(1, 2)?);
    assert_eq!(Rational::new(2, 4)?.to_string(), "2/4");
    Ok(())
  }

  #[test]
  fn malformed_literals() {
    assert_err!("1,5".parse::<Rational>());
    assert_err!("1/2/3".parse::<Rational>());
    assert_err!("1.2.3".parse::<Rational>());
    assert_eq!("1/0".parse::<Rational>().err(), Some(Error::DivisionByZero));
  }

  #[test]
  fn near_degenerate_input() -> Result<(), Error> {
    // A point a hair outside the hypotenuse of a large triangle.
    let mut input = points(&[[0, 0], [1_000_000_000_000, 0], [0, 1_000_000_000_000]]);
    let bump = parse_point("500000000000", "500000000000.000000000000000000001")?;
    input.push(bump.clone());
    let report = supervisor::Supervisor::default().compare(input);
    assert_eq!(report.gift_wrapping.outcome, supervisor::RunOutcome::Valid);
    assert_eq!(report.monotone_chain.outcome, supervisor::RunOutcome::Valid);
    assert_eq!(report.agreement, Some(VertexAgreement::Same));
    let hull = report.monotone_chain.hull.unwrap_or_else(|| Hull::new_unchecked(vec![]));
    assert_eq!(hull.len(), 4);
    assert!(hull.contains(&bump));
    Ok(())
  }

  #[test]
  fn builders_agree_on_circle_points() {
    // Pythagorean triples put every point exactly on the circle of radius 5.
    let input = points(&[
      [5, 0],
      [4, 3],
      [3, 4],
      [0, 5],
      [-3, 4],
      [-4, 3],
      [-5, 0],
      [-4, -3],
      [-3, -4],
      [0, -5],
      [3, -4],
      [4, -3],
      [0, 0],
      [1, 1],
    ]);
    let token = CancelToken::new();
    let gift = assert_ok!(gift_wrapping::convex_hull(input.clone(), &token));
    let chain = assert_ok!(monotone_chain::convex_hull(input.clone(), &token));
    assert_eq!(gift.len(), 12);
    assert_eq!(compare_vertex_sets(&gift, &chain), VertexAgreement::Same);
    assert_ok!(verify(&input, &gift));
    assert_ok!(verify(&input, &chain));
  }
}
