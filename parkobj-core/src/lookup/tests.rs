use super::{Colour, Cursor, RideCategory, RideType, ShopItem};

#[test]
fn test_colour_names() {
    assert_eq!(Colour::from_name("black", Colour::White), Colour::Black);
    assert_eq!(Colour::from_name("dark_olive_green", Colour::Black) as u8, 16);
    assert_eq!(Colour::from_name("light_pink", Colour::Black) as u8, 31);
    assert_eq!(Colour::from_name("mauve", Colour::Teal), Colour::Teal);
    assert_eq!(Colour::IcyBlue.name(), "icy_blue");
}

#[test]
fn test_cursor_names() {
    assert_eq!(Cursor::from_name("CURSOR_ARROW", Cursor::Blank), Cursor::Arrow);
    assert_eq!(Cursor::from_name("CURSOR_HAND_CLOSED", Cursor::Arrow) as u8, 26);
    assert_eq!(Cursor::from_name("CURSOR_STATUE_DOWN", Cursor::Arrow) as u8, 10);
    assert_eq!(Cursor::from_name("cursor_arrow", Cursor::FenceDown), Cursor::FenceDown);
    assert_eq!(Cursor::from_legacy(15, Cursor::Arrow), Cursor::FenceDown);
    assert_eq!(Cursor::from_legacy(200, Cursor::Arrow), Cursor::Arrow);
}

#[test]
fn test_ride_types() {
    assert_eq!(RideType::from_name("3d_cinema"), Some(RideType::ThreeDCinema));
    assert_eq!(RideType::from_name("lim_launched_rc").map(|ty| ty as u8), Some(90));
    assert_eq!(RideType::from_repr(29), None);
    assert_eq!(RideType::from_repr(52).map(RideType::name), Some("wooden_rc"));
    assert_eq!(RideType::from_name("hyper_rc"), None);
}

#[test]
fn test_categories_and_shop_items() {
    assert_eq!("stall".parse::<RideCategory>(), Ok(RideCategory::Shop));
    assert_eq!("tshirt".parse::<ShopItem>().map(|item| item as u8), Ok(20));
    assert_eq!("ice_cream".parse::<ShopItem>(), Ok(ShopItem::IceCream));
    assert_eq!(ShopItem::from_repr(30), None);
}
