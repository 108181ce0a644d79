//! Static lookup tables used to name and classify publishers.
//!
//! - [`OID_PUBLISHERS`]: Naver press ID (zero-padded to 3 digits) to publisher name
//! - [`DOMAIN_FRAGMENTS`]: lower-case domain fragment to publisher name, matched
//!   as a substring in slice order (first match wins)
//! - [`PUBLISHER_GROUPS`]: publisher name to editorial [`Group`]
//!
//! The keyed tables also get a `HashMap` index built on first use.

use crate::models::Group;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Naver press ID to publisher name.
pub static OID_PUBLISHERS: &[(&str, &str)] = &[
    ("001", "연합뉴스"),
    ("002", "프레시안"),
    ("003", "뉴시스"),
    ("004", "내일신문"),
    ("005", "국민일보"),
    ("008", "머니투데이"),
    ("009", "매일경제"),
    ("011", "서울경제"),
    ("014", "파이낸셜뉴스"),
    ("015", "한국경제"),
    ("016", "헤럴드경제"),
    ("018", "이데일리"),
    ("020", "동아일보"),
    ("021", "문화일보"),
    ("022", "세계일보"),
    ("023", "조선일보"),
    ("025", "중앙일보"),
    ("028", "한겨레"),
    ("029", "디지털타임스"),
    ("030", "전자신문"),
    ("031", "아이뉴스24"),
    ("032", "경향신문"),
    ("034", "이코노미스트"),
    ("038", "한국일보"),
    ("052", "YTN"),
    ("055", "SBS"),
    ("056", "KBS"),
    ("057", "MBN"),
    ("065", "스포츠서울"),
    ("076", "스포츠조선"),
    ("079", "노컷뉴스"),
    ("081", "서울신문"),
    ("082", "부산일보"),
    ("088", "매일신문"),
    ("092", "지디넷코리아"),
    ("117", "마이데일리"),
    ("119", "데일리안"),
    ("123", "조세일보"),
    ("138", "디지털데일리"),
    ("143", "쿠키뉴스"),
    ("144", "스포츠월드"),
    ("214", "MBC"),
    ("215", "한국경제TV"),
    ("241", "시사IN"),
    ("243", "이코노미스트"),
    ("277", "아시아경제"),
    ("584", "아시아투데이"),
    ("293", "블로터"),
    ("321", "브릿지경제"),
    ("323", "한국섬유신문"),
    ("324", "이투데이"),
    ("329", "뉴데일리"),
    ("366", "조선비즈"),
    ("374", "SBS Biz"),
    ("383", "한국정경신문"),
    ("410", "어패럴뉴스"),
    ("417", "머니S"),
    ("421", "뉴스1"),
    ("437", "JTBC"),
    ("445", "대한경제"),
    ("448", "서울와이어"),
    ("449", "TV조선"),
    ("465", "여성경제신문"),
    ("468", "스포츠경향"),
    ("512", "뉴스핌"),
    ("529", "싱글리스트"),
    ("586", "시사저널e"),
    ("629", "뉴스토마토"),
    ("645", "아주경제"),
    ("648", "비즈워치"),
    ("654", "비즈트리뷴"),
    ("658", "뷰어스"),
    ("660", "청년일보"),
    ("929", "디지털투데이"),
    ("239", "바이라인네트워크"),
    ("273", "패션비즈"),
];

/// Domain fragment to publisher name. Order matters: several fragments can
/// occur in the same domain and the first one listed wins.
pub static DOMAIN_FRAGMENTS: &[(&str, &str)] = &[
    ("1conomynews", "1코노미뉴스"),
    ("cctimes", "충청타임즈"),
    ("chungnamilbo", "충남일보"),
    ("dtnews24", "대전뉴스"),
    ("enetnews", "이넷뉴스"),
    ("financialreview", "파이낸셜리뷰"),
    ("globalepic", "글로벌에픽"),
    ("gokorea", "고코리아"),
    ("goodmorningcc", "굿모닝충청"),
    ("hinews", "하이뉴스"),
    ("idaegu", "아이대구"),
    ("joongdo", "중도일보"),
    ("kdfnews", "한국면세뉴스"),
    ("ktnews", "강원타임즈"),
    ("newslock", "뉴스락"),
    ("newsway", "뉴스웨이"),
    ("opinionnews", "오피니언뉴스"),
    ("startuptoday", "스타트업투데이"),
    ("straightnews", "스트레이트뉴스"),
    ("tfmedia", "조세금융신문"),
    ("weekly", "CNB저널"),
    ("wolyo", "월요신문"),
    ("womaneconomy", "여성경제신문"),
    ("lawissue", "로이슈"),
    ("newsworker", "뉴스워커"),
    ("topdaily", "톱데일리"),
    ("wikitree", "위키트리"),
    ("thepublic", "더퍼블릭"),
    ("thebigdata", "빅데이터뉴스"),
    ("socialvalue", "소셜밸류"),
    ("smartfn", "스마트에프엔"),
    ("sisacast", "시사캐스트"),
    ("siminilbo", "시민일보"),
    ("seoultimes", "서울타임즈"),
    ("sentv", "서울경제TV"),
    ("segyebiz", "세계비즈"),
    ("pressman", "프레스맨"),
    ("popcornnews", "팝콘뉴스"),
    ("pointe", "포인트데일리"),
    ("onews", "열린뉴스통신"),
    ("nextdaily", "넥스트데일리"),
    ("newswatch", "뉴스워치"),
    ("newsquest", "뉴스퀘스트"),
    ("newsprime", "뉴스프라임"),
    ("newsinside", "뉴스인사이드"),
    ("mkhealth", "매경헬스"),
    ("metroseoul", "메트로신문"),
    ("meconomynews", "M이코노미"),
    ("kbsm", "경북신문"),
    ("joongangenews", "중앙이코노미뉴스"),
    ("iminju", "민주신문"),
    ("ilyo", "일요신문"),
    ("hankooki", "스포츠한국"),
    ("ezyeconomy", "이지경제"),
    ("enewstoday", "이뉴스투데이"),
    ("ekn", "에너지경제"),
    ("dizzotv", "디지틀조선일보"),
    ("cstimes", "컨슈머타임스"),
    ("consumernews", "소비자가만드는신문"),
    ("ceoscoredaily", "CEO스코어데일리"),
    ("breaknews", "브레이크뉴스"),
    ("bizwnews", "비즈월드"),
    ("beyondpost", "비욘드포스트"),
    ("asiatime", "아시아타임즈"),
    ("apnews", "아시아에이"),
    ("biz", "뉴데일리"),
    ("viva100", "브릿지경제"),
    ("srtimes", "SR타임스"),
    ("kpenews", "한국정경신문"),
    ("news2day", "뉴스투데이"),
    ("fashionbiz", "패션비즈"),
    ("econovill", "이코노믹리뷰"),
    ("businessplus", "비즈니스플러스"),
    ("newspim", "뉴스핌"),
    ("m-i", "매일일보"),
    ("pointdaily", "포인트데일리"),
    ("ajunews", "아주경제"),
    ("asiatoday", "아시아투데이"),
    ("xportsnews", "엑스포츠뉴스"),
    ("sports", "엑스포츠뉴스"),
    ("youthdaily", "청년일보"),
    ("seoulwire", "서울와이어"),
    ("newstomato", "뉴스토마토"),
    ("widedaily", "와이드경제"),
    ("apparelnews", "어패럴뉴스"),
    ("biztribune", "비즈트리뷴"),
    ("etoday", "이투데이"),
    ("ngetnews", "뉴스저널리즘"),
    ("hansbiz", "한스경제"),
    ("byline", "바이라인네트워크"),
    ("dealsite", "딜사이트"),
    ("businesspost", "비즈니스포스트"),
    ("dnews", "대한경제"),
    ("insight", "인사이트"),
    ("slist", "싱글리스트"),
    ("theviewers", "뷰어스"),
    ("daily", "데일리한국"),
    ("veritas-a", "베리타스알파"),
    ("fortunekorea", "포춘코리아"),
    ("huffingtonpost", "허핑턴포스트"),
    ("mediapen", "미디어펜"),
    ("paxetv", "팍스경제TV"),
    ("shinailbo", "신아일보"),
    ("pinpointnews", "핀포인트뉴스"),
    ("sisunnews", "시선뉴스"),
    ("sisaon", "시사온"),
    ("smarttoday", "스마트투데이"),
    ("ziksir", "직썰"),
    ("job-post", "잡포스트"),
    ("issuenbiz", "이슈앤비즈"),
    ("fashionn", "패션엔"),
    ("econonews", "이코노뉴스"),
];

/// Publisher name to group.
pub static PUBLISHER_GROUPS: &[(&str, Group)] = &[
    ("1코노미뉴스", Group::B),
    ("CBS노컷뉴스", Group::A),
    ("CEO 스코어데일리", Group::C),
    ("EBN", Group::B),
    ("FETV", Group::C),
    ("IT조선", Group::C),
    ("KBS", Group::A),
    ("K패션뉴스", Group::C),
    ("MBC", Group::A),
    ("MBN", Group::A),
    ("S-저널", Group::C),
    ("SBS", Group::A),
    ("SBS Biz", Group::A),
    ("SR타임스", Group::C),
    ("TV조선", Group::A),
    ("YTN", Group::A),
    ("경향신문", Group::A),
    ("공공뉴스", Group::B),
    ("국민일보", Group::A),
    ("국제섬유신문", Group::A),
    ("굿모닝경제", Group::C),
    ("남다른디테일", Group::B),
    ("내일신문", Group::A),
    ("녹색경제신문", Group::C),
    ("뉴데일리", Group::A),
    ("뉴스1", Group::A),
    ("뉴스워치", Group::C),
    ("뉴스워커", Group::C),
    ("뉴스웨이", Group::B),
    ("뉴스인사이드", Group::C),
    ("뉴스저널리즘", Group::B),
    ("뉴스토마토", Group::C),
    ("뉴스톱", Group::B),
    ("뉴스투데이", Group::B),
    ("뉴스포스트", Group::C),
    ("뉴스핌", Group::A),
    ("뉴시스", Group::A),
    ("뉴시안", Group::C),
    ("대한경제", Group::B),
    ("더리브스", Group::C),
    ("더밸류뉴스", Group::B),
    ("더벨", Group::B),
    ("더스쿠프", Group::B),
    ("더스탁", Group::B),
    ("더팩트", Group::A),
    ("더피알", Group::C),
    ("데일리안", Group::A),
    ("데일리한국", Group::A),
    ("동아닷컴", Group::C),
    ("동아일보", Group::A),
    ("동행미디어 시대", Group::A),
    ("디지털데일리", Group::A),
    ("디지털타임스", Group::A),
    ("디지털투데이", Group::B),
    ("디지틀조선일보", Group::C),
    ("디토앤디토", Group::A),
    ("딜사이트", Group::B),
    ("딜사이트TV", Group::C),
    ("로이슈", Group::B),
    ("마이데일리", Group::B),
    ("매경이코노미", Group::B),
    ("매경헬스", Group::B),
    ("매일경제", Group::A),
    ("매일경제 레이더M", Group::B),
    ("매일경제TV", Group::C),
    ("매일신문", Group::B),
    ("매일일보", Group::B),
    ("머니투데이", Group::A),
    ("머니투데이방송", Group::A),
    ("메가경제", Group::C),
    ("메트로신문", Group::C),
    ("문화일보", Group::A),
    ("문화저널21", Group::C),
    ("미디어펜", Group::C),
    ("바이라인네트워크", Group::A),
    ("부산일보", Group::B),
    ("뷰어스", Group::C),
    ("브릿지경제", Group::B),
    ("블로터", Group::A),
    ("비즈니스워치", Group::A),
    ("비즈니스포스트", Group::B),
    ("비즈니스플러스", Group::B),
    ("비즈트리뷴", Group::C),
    ("비즈한국", Group::C),
    ("서울경제", Group::A),
    ("서울경제TV", Group::A),
    ("서울신문", Group::A),
    ("서울와이어", Group::C),
    ("서울파이낸스", Group::C),
    ("세계비즈", Group::C),
    ("세계일보", Group::A),
    ("소비자가만드는신문", Group::B),
    ("소셜밸류", Group::C),
    ("스마트투데이", Group::C),
    ("스트레이트뉴스", Group::C),
    ("스포츠조선", Group::B),
    ("스포츠한국", Group::B),
    ("시사오늘", Group::C),
    ("시사위크", Group::C),
    ("시사저널이코노미", Group::C),
    ("시사캐스트", Group::C),
    ("신아일보", Group::C),
    ("싱글리스트", Group::C),
    ("아시아경제", Group::A),
    ("아시아타임즈", Group::B),
    ("아시아투데이", Group::A),
    ("아웃스탠딩", Group::A),
    ("아이뉴스24", Group::A),
    ("아주경제", Group::A),
    ("아주일보", Group::C),
    ("알파경제", Group::B),
    ("약업신문", Group::C),
    ("어패럴뉴스", Group::A),
    ("에너지경제", Group::B),
    ("여성경제신문", Group::C),
    ("연합 인포맥스", Group::B),
    ("연합뉴스", Group::A),
    ("연합뉴스TV", Group::A),
    ("오늘경제", Group::C),
    ("월요신문", Group::B),
    ("위키리크스한국", Group::B),
    ("위키트리", Group::C),
    ("이뉴스투데이", Group::B),
    ("이데일리", Group::A),
    ("이코노미스트", Group::B),
    ("이코노믹리뷰", Group::B),
    ("이투데이", Group::A),
    ("인베스트조선", Group::B),
    ("인사이트", Group::C),
    ("인사이트코리아", Group::B),
    ("일간스포츠", Group::B),
    ("일요서울", Group::C),
    ("일요신문", Group::C),
    ("전자신문", Group::A),
    ("조선비즈", Group::A),
    ("조선일보", Group::A),
    ("주간한국", Group::B),
    ("중소기업신문", Group::C),
    ("중앙선데이", Group::A),
    ("중앙이코노미뉴스", Group::C),
    ("중앙일보", Group::A),
    ("지디넷코리아", Group::A),
    ("청년일보", Group::C),
    ("커넥터스", Group::C),
    ("컨슈머타임즈", Group::B),
    ("코리아중앙데일리", Group::A),
    ("코리아타임스", Group::A),
    ("코리아헤럴드", Group::A),
    ("쿠키뉴스", Group::A),
    ("테넌트뉴스", Group::A),
    ("테크엠", Group::A),
    ("토요경제", Group::C),
    ("톱데일리", Group::B),
    ("투데이신문", Group::B),
    ("투데이코리아", Group::C),
    ("파이낸셜뉴스", Group::A),
    ("파이낸셜리뷰", Group::C),
    ("파이낸셜투데이", Group::C),
    ("파이낸셜포스트", Group::C),
    ("팝콘뉴스", Group::C),
    ("패션비즈", Group::A),
    ("패션인사이트", Group::A),
    ("패션포스트", Group::A),
    ("포인트데일리", Group::C),
    ("프라임경제", Group::C),
    ("하이뉴스", Group::C),
    ("한겨레", Group::A),
    ("한경비즈니스", Group::B),
    ("한국경제", Group::A),
    ("한국경제TV", Group::A),
    ("한국금융신문", Group::C),
    ("한국면세뉴스", Group::C),
    ("한국섬유신문", Group::A),
    ("한국일보", Group::A),
    ("한국정경신문", Group::C),
    ("한스경제", Group::B),
    ("허프포스트", Group::C),
    ("헤럴드경제", Group::A),
    ("현대경제신문", Group::C),
    ("후지TV", Group::C),
    ("MTN", Group::A),
];

static OID_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| OID_PUBLISHERS.iter().copied().collect());

static GROUP_INDEX: Lazy<HashMap<&'static str, Group>> =
    Lazy::new(|| PUBLISHER_GROUPS.iter().copied().collect());

/// Look up a publisher by its 3-digit press ID.
pub fn publisher_for_oid(oid: &str) -> Option<&'static str> {
    OID_INDEX.get(oid).copied()
}

/// First publisher whose fragment occurs in `domain`.
pub fn publisher_for_domain(domain: &str) -> Option<&'static str> {
    DOMAIN_FRAGMENTS
        .iter()
        .find(|(fragment, _)| domain.contains(fragment))
        .map(|(_, name)| *name)
}

/// Group for a canonical publisher name.
pub fn group_for_publisher(publisher: &str) -> Option<Group> {
    GROUP_INDEX.get(publisher).copied()
}
