//! Localized (vi) messages returned in `{ "error": ... }` envelopes.

// Local
pub const SEARCH_QUERY_REQUIRED: &str = "Từ khóa tìm kiếm không được để trống";
pub const NOT_FOUND: &str = "Không tìm thấy tài nguyên";
pub const INVALID_PATH: &str = "Tham số đường dẫn không hợp lệ";
pub const METHOD_NOT_ALLOWED: &str = "Phương thức không được hỗ trợ";
pub const PAYLOAD_TOO_LARGE: &str = "Dữ liệu gửi lên quá lớn";

// Clubs
pub const LIST_CLUBS_FAILED: &str = "Lấy danh sách câu lạc bộ thất bại";
pub const CREATE_CLUB_FAILED: &str = "Tạo câu lạc bộ thất bại";
pub const SEARCH_CLUBS_FAILED: &str = "Tìm kiếm câu lạc bộ thất bại";
pub const MY_CLUBS_FAILED: &str = "Lấy danh sách câu lạc bộ của bạn thất bại";
pub const GET_CLUB_FAILED: &str = "Lấy thông tin câu lạc bộ thất bại";
pub const UPDATE_CLUB_FAILED: &str = "Cập nhật câu lạc bộ thất bại";
pub const DELETE_CLUB_FAILED: &str = "Xóa câu lạc bộ thất bại";
pub const LIST_MEMBERS_FAILED: &str = "Lấy danh sách thành viên thất bại";
pub const JOIN_CLUB_FAILED: &str = "Tham gia câu lạc bộ thất bại";
pub const LEAVE_CLUB_FAILED: &str = "Rời câu lạc bộ thất bại";
pub const REMOVE_MEMBER_FAILED: &str = "Xóa thành viên thất bại";
pub const UPDATE_MEMBER_ROLE_FAILED: &str = "Cập nhật vai trò thành viên thất bại";
pub const LIST_JOIN_REQUESTS_FAILED: &str = "Lấy danh sách yêu cầu tham gia thất bại";
pub const APPROVE_JOIN_REQUEST_FAILED: &str = "Duyệt yêu cầu tham gia thất bại";
pub const REJECT_JOIN_REQUEST_FAILED: &str = "Từ chối yêu cầu tham gia thất bại";
pub const CLUB_LEADERBOARD_FAILED: &str = "Lấy bảng xếp hạng câu lạc bộ thất bại";
pub const CLUB_ACTIVITIES_FAILED: &str = "Lấy hoạt động của câu lạc bộ thất bại";

// Challenges
pub const LIST_CHALLENGES_FAILED: &str = "Lấy danh sách thử thách thất bại";
pub const CREATE_CHALLENGE_FAILED: &str = "Tạo thử thách thất bại";
pub const MY_CHALLENGES_FAILED: &str = "Lấy danh sách thử thách của bạn thất bại";
pub const GET_CHALLENGE_FAILED: &str = "Lấy thông tin thử thách thất bại";
pub const UPDATE_CHALLENGE_FAILED: &str = "Cập nhật thử thách thất bại";
pub const DELETE_CHALLENGE_FAILED: &str = "Xóa thử thách thất bại";
pub const JOIN_CHALLENGE_FAILED: &str = "Tham gia thử thách thất bại";
pub const LEAVE_CHALLENGE_FAILED: &str = "Rời thử thách thất bại";
pub const CHALLENGE_PARTICIPANTS_FAILED: &str = "Lấy danh sách người tham gia thử thách thất bại";
pub const CHALLENGE_LEADERBOARD_FAILED: &str = "Lấy bảng xếp hạng thử thách thất bại";
pub const INVITE_TO_CHALLENGE_FAILED: &str = "Gửi lời mời tham gia thử thách thất bại";
pub const LIST_INVITATIONS_FAILED: &str = "Lấy danh sách lời mời thất bại";
pub const ACCEPT_INVITATION_FAILED: &str = "Chấp nhận lời mời thất bại";
pub const DECLINE_INVITATION_FAILED: &str = "Từ chối lời mời thất bại";
pub const DELETE_INVITATION_FAILED: &str = "Xóa lời mời thất bại";

// Events
pub const LIST_EVENTS_FAILED: &str = "Lấy danh sách sự kiện thất bại";
pub const CREATE_EVENT_FAILED: &str = "Tạo sự kiện thất bại";
pub const GET_EVENT_FAILED: &str = "Lấy thông tin sự kiện thất bại";
pub const UPDATE_EVENT_FAILED: &str = "Cập nhật sự kiện thất bại";
pub const DELETE_EVENT_FAILED: &str = "Xóa sự kiện thất bại";
pub const REGISTER_EVENT_FAILED: &str = "Đăng ký sự kiện thất bại";
pub const UNREGISTER_EVENT_FAILED: &str = "Hủy đăng ký sự kiện thất bại";
pub const EVENT_PARTICIPANTS_FAILED: &str = "Lấy danh sách người tham gia sự kiện thất bại";
pub const EVENT_RACES_FAILED: &str = "Lấy danh sách cự ly của sự kiện thất bại";

// Races
pub const LIST_RACES_FAILED: &str = "Lấy danh sách giải chạy thất bại";
pub const CREATE_RACE_FAILED: &str = "Tạo giải chạy thất bại";
pub const GET_RACE_FAILED: &str = "Lấy thông tin giải chạy thất bại";
pub const UPDATE_RACE_FAILED: &str = "Cập nhật giải chạy thất bại";
pub const DELETE_RACE_FAILED: &str = "Xóa giải chạy thất bại";
pub const REGISTER_RACE_FAILED: &str = "Đăng ký giải chạy thất bại";
pub const RACE_RESULTS_FAILED: &str = "Lấy kết quả giải chạy thất bại";

// Activities
pub const LIST_ACTIVITIES_FAILED: &str = "Lấy danh sách hoạt động thất bại";
pub const CREATE_ACTIVITY_FAILED: &str = "Tạo hoạt động thất bại";
pub const ACTIVITY_FEED_FAILED: &str = "Lấy bảng tin hoạt động thất bại";
pub const GET_ACTIVITY_FAILED: &str = "Lấy thông tin hoạt động thất bại";
pub const UPDATE_ACTIVITY_FAILED: &str = "Cập nhật hoạt động thất bại";
pub const DELETE_ACTIVITY_FAILED: &str = "Xóa hoạt động thất bại";
pub const LIKE_ACTIVITY_FAILED: &str = "Thích hoạt động thất bại";
pub const UNLIKE_ACTIVITY_FAILED: &str = "Bỏ thích hoạt động thất bại";
pub const LIST_COMMENTS_FAILED: &str = "Lấy danh sách bình luận thất bại";
pub const ADD_COMMENT_FAILED: &str = "Thêm bình luận thất bại";

// Integrations
pub const LIST_INTEGRATIONS_FAILED: &str = "Lấy danh sách kết nối thất bại";
pub const CONNECT_INTEGRATION_FAILED: &str = "Tạo liên kết kết nối thất bại";
pub const INTEGRATION_CALLBACK_FAILED: &str = "Xác thực kết nối thất bại";
pub const SYNC_INTEGRATION_FAILED: &str = "Đồng bộ dữ liệu thất bại";
pub const DISCONNECT_INTEGRATION_FAILED: &str = "Ngắt kết nối thất bại";

// Certificate and medal templates
pub const LIST_CERTIFICATE_TEMPLATES_FAILED: &str = "Lấy danh sách mẫu chứng nhận thất bại";
pub const CREATE_CERTIFICATE_TEMPLATE_FAILED: &str = "Tạo mẫu chứng nhận thất bại";
pub const GET_CERTIFICATE_TEMPLATE_FAILED: &str = "Lấy thông tin mẫu chứng nhận thất bại";
pub const UPDATE_CERTIFICATE_TEMPLATE_FAILED: &str = "Cập nhật mẫu chứng nhận thất bại";
pub const DELETE_CERTIFICATE_TEMPLATE_FAILED: &str = "Xóa mẫu chứng nhận thất bại";
pub const PREVIEW_CERTIFICATE_FAILED: &str = "Xem trước chứng nhận thất bại";
pub const LIST_MEDAL_TEMPLATES_FAILED: &str = "Lấy danh sách mẫu huy chương thất bại";
pub const CREATE_MEDAL_TEMPLATE_FAILED: &str = "Tạo mẫu huy chương thất bại";
pub const GET_MEDAL_TEMPLATE_FAILED: &str = "Lấy thông tin mẫu huy chương thất bại";
pub const UPDATE_MEDAL_TEMPLATE_FAILED: &str = "Cập nhật mẫu huy chương thất bại";
pub const DELETE_MEDAL_TEMPLATE_FAILED: &str = "Xóa mẫu huy chương thất bại";

// User profile
pub const GET_PROFILE_FAILED: &str = "Lấy thông tin người dùng thất bại";
pub const UPDATE_PROFILE_FAILED: &str = "Cập nhật thông tin người dùng thất bại";
pub const USER_STATS_FAILED: &str = "Lấy thống kê người dùng thất bại";
pub const CHANGE_PASSWORD_FAILED: &str = "Đổi mật khẩu thất bại";
pub const PUBLIC_PROFILE_FAILED: &str = "Lấy hồ sơ người dùng thất bại";

// Achievements
pub const LIST_ACHIEVEMENTS_FAILED: &str = "Lấy danh sách thành tích thất bại";
pub const MY_ACHIEVEMENTS_FAILED: &str = "Lấy thành tích của bạn thất bại";
pub const GET_ACHIEVEMENT_FAILED: &str = "Lấy thông tin thành tích thất bại";
